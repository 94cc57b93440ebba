//! fuzzy-rose - CLI and terminal preview for the fuzzy rose
//!
//! Usage:
//!   fuzzy-rose view <rose.yaml>          Launch the animated terminal preview
//!   fuzzy-rose render <rose.yaml> [...]  Render to SVG, JSON or PNG
//!   fuzzy-rose profile <a> <b> <c> <d>   Print a petal profile
//!   fuzzy-rose pulse [-n ticks]          Print the opacity pulse
//!   fuzzy-rose random [-n petals]        Generate a random rose file
//!   fuzzy-rose hit <rose.yaml> <x> <y>   Report the petal under a point

mod cli;

use std::env;
use std::io::{self, stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use ratatui_image::{picker::{Picker, ProtocolType}, protocol::StatefulProtocol, StatefulImage};
use tracing_subscriber::EnvFilter;

use fuzzy_rose::{rose_to_svg, tick_rose, AnimationState, Rose, SvgOptions};

use cli::{cmd_hit, cmd_profile, cmd_pulse, cmd_random, cmd_render, svg_to_image, RoseFile};

/// Time between animation ticks (~20 fps).
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Preview raster is the canvas size times this.
const PREVIEW_SCALE: f64 = 2.0;

/// Install the stderr subscriber. `RUST_LOG` wins over `default`.
fn init_logging(default: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Application state for the terminal preview.
struct App {
    /// The rose being animated
    rose: Rose,
    /// Canvas settings from the rose file
    options: SvgOptions,
    background: svgtypes::Color,
    /// Tick counter owned by the host, not the rose
    state: AnimationState,
    paused: bool,
    last_tick: Instant,
    /// Source path shown in the title bar
    path: String,
    /// Image picker for terminal protocol detection
    picker: Picker,
    /// Current rendered image protocol state
    image_state: Option<Box<dyn StatefulProtocol>>,
    /// Flag to indicate image needs re-rendering
    needs_image_update: bool,
    should_quit: bool,
}

impl App {
    fn new(path: &str) -> Result<Self> {
        let file = RoseFile::load(path)?;
        let rose = file.build()?;
        let background = file.canvas.background_color()?;

        // Initialize image picker - force Sixel protocol
        let mut picker = Picker::from_termios()
            .unwrap_or_else(|_| Picker::new((8, 16)));
        picker.protocol_type = ProtocolType::Sixel;

        Ok(App {
            rose,
            options: file.svg_options(),
            background,
            state: AnimationState::new(),
            paused: false,
            last_tick: Instant::now(),
            path: path.to_string(),
            picker,
            image_state: None,
            needs_image_update: true,
            should_quit: false,
        })
    }

    /// Advance the pulse if a tick is due.
    fn update(&mut self) {
        if self.paused || self.last_tick.elapsed() < TICK_INTERVAL {
            return;
        }
        self.step();
        self.last_tick = Instant::now();
    }

    fn step(&mut self) {
        tick_rose(&mut self.rose, &mut self.state);
        self.needs_image_update = true;
    }

    fn reset(&mut self) {
        self.state = AnimationState::new();
        self.rose.alpha = 1.0;
        self.needs_image_update = true;
    }

    fn update_image(&mut self) -> Result<()> {
        if self.needs_image_update {
            let svg = rose_to_svg(&self.rose, &self.options);
            let img = svg_to_image(&svg, self.options.size, PREVIEW_SCALE, self.background)?;
            self.image_state = Some(self.picker.new_resize_protocol(img));
            self.needs_image_update = false;
        }
        Ok(())
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let Some(command) = args.get(1) else {
        print_usage();
        std::process::exit(1);
    };
    let rest = &args[2..];

    let result = match command.as_str() {
        "render" => {
            init_logging("info");
            cmd_render(rest)
        }
        "profile" => {
            init_logging("info");
            cmd_profile(rest)
        }
        "pulse" => {
            init_logging("info");
            cmd_pulse(rest)
        }
        "random" => {
            init_logging("info");
            cmd_random(rest)
        }
        "hit" => {
            init_logging("info");
            cmd_hit(rest)
        }
        // Log lines would scribble over the alternate screen.
        "view" => {
            init_logging("off");
            match rest.first() {
                Some(path) => run_tui(path),
                None => Err(anyhow::anyhow!("view needs a rose file")),
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        path if is_rose_file(path) => {
            init_logging("off");
            run_tui(path)
        }
        other => {
            print_usage();
            Err(anyhow::anyhow!("unknown command: {}", other))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn is_rose_file(path: &str) -> bool {
    [".yaml", ".yml", ".json"].iter().any(|ext| path.ends_with(ext))
}

fn run_tui(path: &str) -> Result<()> {
    // Load before touching the terminal so errors print normally.
    let mut app = App::new(path)?;

    // Initialize terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.update();
        app.update_image()?;

        terminal.draw(|frame| ui(frame, app))?;

        if event::poll(TICK_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Char(' ') => {
                            app.paused = !app.paused;
                        }
                        KeyCode::Char('.') if app.paused => {
                            app.step();
                        }
                        KeyCode::Char('r') => {
                            app.reset();
                        }
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &mut App) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24),
            Constraint::Min(40),
        ])
        .split(frame.area());

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Length(6),
        ])
        .split(layout[0]);

    // Stats panel
    let stats_text = format!(
        "Petals: {}\nShapes: {}\nTick: {}\nAlpha: {:.3}\n{}",
        app.rose.petals.len(),
        app.rose.shapes.len(),
        app.state.count,
        app.rose.alpha,
        if app.paused { "Paused" } else { "Running" },
    );
    let stats = Paragraph::new(stats_text)
        .block(Block::default()
            .title(" Rose ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)))
        .style(Style::default().fg(Color::White));

    frame.render_widget(stats, sidebar[0]);

    // Help
    let help = Paragraph::new("space pause\n. step\nr reset\nq quit")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, sidebar[1]);

    let border_color = if app.paused { Color::Yellow } else { Color::Green };
    let image_block = Block::default()
        .title(format!(" {} ", app.path))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = image_block.inner(layout[1]);
    frame.render_widget(image_block, layout[1]);

    // Render the image using ratatui-image
    if let Some(ref mut image_state) = app.image_state {
        let image_widget = StatefulImage::new(None);
        frame.render_stateful_widget(image_widget, inner_area, image_state);
    }
}

fn print_usage() {
    eprintln!("fuzzy-rose - a pulsing radial rose from petal profiles");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  fuzzy-rose view <rose.yaml>                Launch the terminal preview");
    eprintln!("  fuzzy-rose render <rose.yaml|-> [options]  Render to SVG, JSON or PNG");
    eprintln!("  fuzzy-rose profile <a> <b> <c> <d> [-r n]  Print a petal profile");
    eprintln!("  fuzzy-rose pulse [-n ticks]                Print the opacity pulse");
    eprintln!("  fuzzy-rose random [-n petals] [--seed s]   Generate a random rose file");
    eprintln!("  fuzzy-rose hit <rose.yaml> <x> <y>         Report the petal under a point");
    eprintln!("  fuzzy-rose help                            Show this message");
    eprintln!();
    eprintln!("Run a command with --help for its options.");
    eprintln!();
    eprintln!("Stdin support:");
    eprintln!("  Use '-' as the rose file to read YAML from stdin:");
    eprintln!("  fuzzy-rose random --seed 1 | fuzzy-rose render - -o rose.svg");
    eprintln!();
    eprintln!("Logging:");
    eprintln!("  RUST_LOG=debug fuzzy-rose render rose.yaml   Log to stderr");
    eprintln!();
    eprintln!("Preview Controls:");
    eprintln!("  space     Pause / resume the pulse");
    eprintln!("  .         Step one tick while paused");
    eprintln!("  r         Reset the tick counter");
    eprintln!("  q / Esc   Quit");
}
