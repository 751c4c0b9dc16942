//! Interactive prediction form
//!
//! Two pages behind a sidebar: the prediction form and the model
//! description. All view state lives in a single `App` value threaded
//! through the render loop; the full frame is rebuilt after every key
//! event and nothing ambient survives between them.

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io;
use std::path::PathBuf;

use crate::classifier::{TransportClassifier, TransportPrediction};
use crate::cli::about::ABOUT_TEXT;
use crate::passenger::{CabinSide, Deck, Destination, HomePlanet, PassengerForm, PassengerRecord};
use crate::report;

const PAGES: [&str; 2] = ["Make Prediction", "About Model"];

/// Step applied to numeric fields on PageUp/PageDown.
const BIG_STEP: i64 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Predict,
    About,
}

/// Form fields in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Age,
    Vip,
    CryoSleep,
    HomePlanet,
    Destination,
    CabinDeck,
    CabinNumber,
    CabinSide,
    RoomService,
    FoodCourt,
    ShoppingMall,
    Spa,
    VrDeck,
}

impl Field {
    const ALL: [Field; 13] = [
        Field::Age,
        Field::Vip,
        Field::CryoSleep,
        Field::HomePlanet,
        Field::Destination,
        Field::CabinDeck,
        Field::CabinNumber,
        Field::CabinSide,
        Field::RoomService,
        Field::FoodCourt,
        Field::ShoppingMall,
        Field::Spa,
        Field::VrDeck,
    ];

    fn label(self) -> &'static str {
        match self {
            Field::Age => "Age",
            Field::Vip => "VIP Status",
            Field::CryoSleep => "CryoSleep",
            Field::HomePlanet => "Home Planet",
            Field::Destination => "Destination",
            Field::CabinDeck => "Cabin Deck",
            Field::CabinNumber => "Cabin Number",
            Field::CabinSide => "Cabin Side",
            Field::RoomService => "Room Service",
            Field::FoodCourt => "Food Court",
            Field::ShoppingMall => "Shopping Mall",
            Field::Spa => "Spa",
            Field::VrDeck => "VR Deck",
        }
    }

    fn is_numeric(self) -> bool {
        matches!(
            self,
            Field::Age
                | Field::CabinNumber
                | Field::RoomService
                | Field::FoodCourt
                | Field::ShoppingMall
                | Field::Spa
                | Field::VrDeck
        )
    }
}

/// Outcome of the last prediction action, kept until the next one.
enum Outcome {
    Predicted {
        record: PassengerRecord,
        prediction: TransportPrediction,
    },
    Failed(String),
}

pub struct App {
    page: Page,
    form: PassengerForm,
    selected: usize,
    outcome: Option<Outcome>,
    model_path: PathBuf,
}

impl App {
    fn new(model_path: PathBuf) -> Self {
        Self {
            page: Page::Predict,
            form: PassengerForm::default(),
            selected: 0,
            outcome: None,
            model_path,
        }
    }

    fn selected_field(&self) -> Field {
        Field::ALL[self.selected]
    }

    fn next_field(&mut self) {
        self.selected = (self.selected + 1) % Field::ALL.len();
    }

    fn previous_field(&mut self) {
        self.selected = if self.selected == 0 {
            Field::ALL.len() - 1
        } else {
            self.selected - 1
        };
    }

    fn toggle_page(&mut self) {
        self.page = match self.page {
            Page::Predict => Page::About,
            Page::About => Page::Predict,
        };
    }

    /// Adjust the selected field: cycle enumerations, step numbers within
    /// their bounds, toggle flags.
    fn adjust(&mut self, delta: i64) {
        let field = self.selected_field();
        let form = &mut self.form;
        match field {
            Field::Age => form.age = step(i64::from(form.age), delta, 0, 120) as u8,
            Field::Vip => form.vip = !form.vip,
            Field::CryoSleep => form.cryo_sleep = !form.cryo_sleep,
            Field::HomePlanet => form.home_planet = cycle(&HomePlanet::ALL, form.home_planet, delta),
            Field::Destination => {
                form.destination = cycle(&Destination::ALL, form.destination, delta)
            }
            Field::CabinDeck => form.deck = cycle(&Deck::ALL, form.deck, delta),
            Field::CabinNumber => {
                form.cabin_num = step(i64::from(form.cabin_num), delta, 0, 2000) as u16
            }
            Field::CabinSide => form.side = cycle(&CabinSide::ALL, form.side, delta),
            Field::RoomService => form.room_service = step_u32(form.room_service, delta),
            Field::FoodCourt => form.food_court = step_u32(form.food_court, delta),
            Field::ShoppingMall => form.shopping_mall = step_u32(form.shopping_mall, delta),
            Field::Spa => form.spa = step_u32(form.spa, delta),
            Field::VrDeck => form.vr_deck = step_u32(form.vr_deck, delta),
        }
    }

    fn field_value(&self, field: Field) -> String {
        let form = &self.form;
        match field {
            Field::Age => form.age.to_string(),
            Field::Vip => yes_no(form.vip).to_string(),
            Field::CryoSleep => yes_no(form.cryo_sleep).to_string(),
            Field::HomePlanet => form.home_planet.to_string(),
            Field::Destination => form.destination.to_string(),
            Field::CabinDeck => form.deck.to_string(),
            Field::CabinNumber => form.cabin_num.to_string(),
            Field::CabinSide => form.side.to_string(),
            Field::RoomService => form.room_service.to_string(),
            Field::FoodCourt => form.food_court.to_string(),
            Field::ShoppingMall => form.shopping_mall.to_string(),
            Field::Spa => form.spa.to_string(),
            Field::VrDeck => form.vr_deck.to_string(),
        }
    }

    /// The Predict action: assemble a fresh record, load the artifact, run
    /// inference. Inference is unreachable when the load fails.
    fn predict(&mut self) {
        let record = PassengerRecord::from_form(&self.form);
        tracing::debug!(?record, "assembled prediction request");

        self.outcome = Some(match TransportClassifier::load(&self.model_path) {
            Ok(classifier) => Outcome::Predicted {
                prediction: classifier.predict(&record),
                record,
            },
            Err(err) => Outcome::Failed(err.to_string()),
        });
    }
}

fn yes_no(v: bool) -> &'static str {
    if v {
        "Yes"
    } else {
        "No"
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, delta: i64) -> T {
    let len = all.len() as i64;
    let index = all.iter().position(|v| *v == current).unwrap_or(0) as i64;
    all[(index + delta).rem_euclid(len) as usize]
}

fn step(value: i64, delta: i64, min: i64, max: i64) -> i64 {
    (value + delta).clamp(min, max)
}

fn step_u32(value: u32, delta: i64) -> u32 {
    step(i64::from(value), delta, 0, i64::from(u32::MAX)) as u32
}

pub fn run(model_path: PathBuf) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(model_path);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Tab => app.toggle_page(),
                    _ if app.page == Page::About => {}
                    KeyCode::Down | KeyCode::Char('j') => app.next_field(),
                    KeyCode::Up | KeyCode::Char('k') => app.previous_field(),
                    KeyCode::Left | KeyCode::Char('h') => app.adjust(-1),
                    KeyCode::Right | KeyCode::Char('l') => app.adjust(1),
                    KeyCode::PageUp if app.selected_field().is_numeric() => app.adjust(BIG_STEP),
                    KeyCode::PageDown if app.selected_field().is_numeric() => {
                        app.adjust(-BIG_STEP)
                    }
                    KeyCode::Enter | KeyCode::Char('p') => app.predict(),
                    _ => {}
                }
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    // Header
    let header = Paragraph::new(" Transported | Passenger Transportation Predictor")
        .style(Style::default().fg(Color::Cyan).bold())
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    // Sidebar + content
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(0)])
        .split(chunks[1]);

    render_sidebar(f, main_chunks[0], app);

    match app.page {
        Page::Predict => render_predict_page(f, main_chunks[1], app),
        Page::About => render_about_page(f, main_chunks[1]),
    }

    // Footer
    let help = match app.page {
        Page::Predict => " Tab:Page  j/k:Field  h/l:Adjust  PgUp/PgDn:±25  Enter:Predict  q:Quit",
        Page::About => " Tab:Page  q:Quit",
    };
    let footer = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, chunks[2]);
}

fn render_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = PAGES.iter().map(|p| ListItem::new(*p)).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Navigation "))
        .highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(match app.page {
        Page::Predict => 0,
        Page::About => 1,
    }));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_about_page(f: &mut Frame, area: Rect) {
    let about = Paragraph::new(ABOUT_TEXT)
        .block(Block::default().borders(Borders::ALL).title(" About the Model "))
        .wrap(Wrap { trim: false });
    f.render_widget(about, area);
}

fn render_predict_page(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(18), Constraint::Min(0)])
        .split(area);

    render_form(f, chunks[0], app);
    render_outcome(f, chunks[1], app);
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![section_line("Personal Information")];
    for field in &Field::ALL[..5] {
        lines.push(field_line(app, *field));
    }
    lines.push(Line::from(""));
    lines.push(section_line("Cabin & Spending Information"));
    for field in &Field::ALL[5..] {
        lines.push(field_line(app, *field));
    }

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Enter Passenger Details "),
    );
    f.render_widget(form, area);
}

fn section_line(title: &str) -> Line<'_> {
    Line::from(Span::styled(
        title,
        Style::default().fg(Color::Yellow).bold(),
    ))
}

fn field_line(app: &App, field: Field) -> Line<'static> {
    let selected = app.selected_field() == field;
    let marker = if selected { "> " } else { "  " };

    let label_style = if selected {
        Style::default().bold()
    } else {
        Style::default()
    };
    let value_style = if selected {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::styled(format!("{marker}{:<16}", field.label()), label_style),
        Span::styled(app.field_value(field), value_style),
    ])
}

fn render_outcome(f: &mut Frame, area: Rect, app: &App) {
    match &app.outcome {
        None => {
            let hint = Paragraph::new(format!(
                "Press Enter to predict. Model: {}",
                app.model_path.display()
            ))
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(" Prediction "));
            f.render_widget(hint, area);
        }

        Some(Outcome::Failed(message)) => {
            let error = Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Red).bold())
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Red))
                        .title(" Prediction Failed "),
                )
                .wrap(Wrap { trim: false });
            f.render_widget(error, area);
        }

        Some(Outcome::Predicted { record, prediction }) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(4),
                    Constraint::Length(3),
                    Constraint::Length(3),
                ])
                .split(area);

            let rows: Vec<Line> = report::record_rows(record)
                .into_iter()
                .map(|(field, value)| {
                    Line::from(vec![
                        Span::styled(format!("{field:<14}"), Style::default().fg(Color::DarkGray)),
                        Span::raw(value),
                    ])
                })
                .collect();
            let echo = Paragraph::new(rows)
                .block(Block::default().borders(Borders::ALL).title(" Input Data "))
                .wrap(Wrap { trim: false });
            f.render_widget(echo, chunks[0]);

            let color = if prediction.is_transported {
                Color::Green
            } else {
                Color::Red
            };
            let gauge = Gauge::default()
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Prediction Probability "),
                )
                .gauge_style(Style::default().fg(color))
                .ratio(prediction.probability)
                .label(report::probability_label(prediction));
            f.render_widget(gauge, chunks[1]);

            let verdict = Paragraph::new(format!(
                "This passenger is {} (probability {})",
                report::verdict(prediction),
                report::probability_label(prediction)
            ))
            .style(Style::default().fg(color).bold())
            .block(Block::default().borders(Borders::ALL));
            f.render_widget(verdict, chunks[2]);
        }
    }
}
