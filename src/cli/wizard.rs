//! Interactive TUI wizard for the pathway questionnaire
//!
//! Walks the user through the fixed eight-step questionnaire: intro, six
//! question screens, results. Forward navigation out of a question screen is
//! gated by that screen's completeness predicate; going backward is always
//! allowed. Completing the results screen hands the accumulated answers back
//! to the caller, which runs the resolver and renders the report.
//!
//! # Architecture
//!
//! - `WizardState`: state machine tracking the current step, the accumulated
//!   `Answers` and the derived progress percentage
//! - `WizardStep`: enum representing each screen with embedded cursor state
//! - `WizardResult`: final output (completed answers, or quit)
//!
//! The step sequence is total and linear; there is no branching and no step
//! insertion. Multi-select screens use set-toggle semantics on the answers
//! record, so re-selecting a value deselects it.

use std::io::{stdout, Stdout};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Terminal,
};

use crate::pathway::{
    AccommodationOption, Answers, CostPreference, Country, EqfBand, FundingProfile, Sector, Step,
    StudyMode, SupportFlag,
};

// ============================================================================
// Core Result Types
// ============================================================================

/// Result of wizard execution
#[derive(Debug, Clone)]
pub enum WizardResult {
    /// User reached the results screen and confirmed
    Complete(Answers),
    /// User quit the wizard
    Quit,
}

// ============================================================================
// Step Definitions
// ============================================================================

/// Pane focus on the mobility screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MobilityFocus {
    Destinations,
    Accommodation,
}

/// Pane focus on the finance screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FinanceFocus {
    Funding,
    Support,
    Cost,
}

/// Individual wizard screen with embedded cursor state.
///
/// Selections themselves live in `Answers`; the step only carries where the
/// cursor is, so toggling and re-rendering can never disagree with the
/// recorded answers.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardStep {
    Intro,

    /// Home country single-select
    CurrentCountry { selected: usize },

    /// EQF band single-select
    CurrentLevel { selected: usize },

    /// Study mode single-select
    StudyMode { selected: usize },

    /// Destination multi-select (with "not sure yet" sentinel) plus
    /// accommodation preferences
    Mobility { focus: MobilityFocus, cursor: usize },

    /// Funding profile, support flags and cost preference
    Finance { focus: FinanceFocus, cursor: usize },

    /// Sector interests multi-select
    Interests { cursor: usize },

    /// Answer summary before resolution
    Results,
}

impl WizardStep {
    /// The domain step tag this screen belongs to.
    pub fn tag(&self) -> Step {
        match self {
            WizardStep::Intro => Step::Intro,
            WizardStep::CurrentCountry { .. } => Step::CurrentCountry,
            WizardStep::CurrentLevel { .. } => Step::CurrentLevel,
            WizardStep::StudyMode { .. } => Step::StudyMode,
            WizardStep::Mobility { .. } => Step::Mobility,
            WizardStep::Finance { .. } => Step::Finance,
            WizardStep::Interests { .. } => Step::Interests,
            WizardStep::Results => Step::Results,
        }
    }

    /// Get the display title for this step
    pub fn title(&self) -> &'static str {
        self.tag().title()
    }
}

// ============================================================================
// Action Types
// ============================================================================

/// Action to take after handling an event
#[derive(Debug, Clone)]
pub enum StepAction {
    /// Move to next step (subject to the completeness gate)
    NextStep,
    /// Move to previous step
    PrevStep,
    /// Stay on current step
    Stay,
    /// Complete wizard with result
    Complete(WizardResult),
}

// ============================================================================
// Wizard State Machine
// ============================================================================

/// Main wizard state machine
pub struct WizardState {
    /// The fixed, ordered screen list
    pub steps: Vec<WizardStep>,
    /// Current step index
    pub current_index: usize,
    /// Accumulated answers
    pub answers: Answers,
    /// Show quit confirmation dialog
    pub show_quit_confirm: bool,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::with_answers(Answers::new())
    }
}

impl WizardState {
    /// Create new wizard state starting at the intro screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Create wizard state pre-populated with answers (e.g. from CLI flags)
    pub fn with_answers(answers: Answers) -> Self {
        Self {
            steps: build_steps(),
            current_index: 0,
            answers,
            show_quit_confirm: false,
        }
    }

    /// Get current step
    pub fn current_step(&self) -> Option<&WizardStep> {
        self.steps.get(self.current_index)
    }

    /// Get mutable reference to current step
    pub fn current_step_mut(&mut self) -> Option<&mut WizardStep> {
        self.steps.get_mut(self.current_index)
    }

    /// Domain tag of the current step
    pub fn step_tag(&self) -> Step {
        self.current_step().map(WizardStep::tag).unwrap_or(Step::Intro)
    }

    /// Whether the current step's completeness predicate holds
    pub fn can_advance(&self) -> bool {
        self.answers.step_complete(self.step_tag())
    }

    /// Move to the next step. No-op when the current step's completeness
    /// predicate does not hold or the wizard is already on the last step.
    pub fn advance(&mut self) {
        if self.can_advance() && self.current_index < self.steps.len() - 1 {
            self.current_index += 1;
        }
    }

    /// Move to the previous step; always permitted, clamps at intro.
    pub fn retreat(&mut self) {
        self.current_index = self.current_index.saturating_sub(1);
    }

    /// Progress percentage over the six active question steps.
    /// Zero on the intro and results screens.
    pub fn progress(&self) -> f64 {
        match self.step_tag().active_index() {
            Some(i) => (i + 1) as f64 / Step::ACTIVE_COUNT as f64 * 100.0,
            None => 0.0,
        }
    }

    /// Check if we're on the last step
    pub fn is_last_step(&self) -> bool {
        self.current_index == self.steps.len() - 1
    }
}

/// The fixed screen sequence. One entry per domain step, same order.
fn build_steps() -> Vec<WizardStep> {
    vec![
        WizardStep::Intro,
        WizardStep::CurrentCountry { selected: 0 },
        WizardStep::CurrentLevel { selected: 0 },
        WizardStep::StudyMode { selected: 0 },
        WizardStep::Mobility {
            focus: MobilityFocus::Destinations,
            cursor: 0,
        },
        WizardStep::Finance {
            focus: FinanceFocus::Funding,
            cursor: 0,
        },
        WizardStep::Interests { cursor: 0 },
        WizardStep::Results,
    ]
}

// ============================================================================
// Terminal Setup/Teardown
// ============================================================================

/// Setup terminal for TUI rendering with panic-safe cleanup
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    // Install panic hook for clean terminal restoration
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        teardown_terminal();
        original_hook(panic_info);
    }));

    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
}

// ============================================================================
// Entry Point
// ============================================================================

/// Run the wizard, starting from any answers already supplied on the CLI.
pub fn run_wizard(initial: Answers) -> Result<WizardResult> {
    let mut wizard = WizardState::with_answers(initial);

    let mut terminal = setup_terminal()?;
    let result = run_wizard_loop(&mut terminal, &mut wizard);
    teardown_terminal();

    result
}

// ============================================================================
// Event Loop
// ============================================================================

/// Main wizard event loop
fn run_wizard_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    wizard: &mut WizardState,
) -> Result<WizardResult> {
    loop {
        terminal.draw(|f| render_wizard(f, wizard))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events, not release
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Handle quit confirmation overlay first
                if wizard.show_quit_confirm {
                    match key.code {
                        KeyCode::Char('y') | KeyCode::Char('Y') => {
                            return Ok(WizardResult::Quit);
                        }
                        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                            wizard.show_quit_confirm = false;
                        }
                        _ => {}
                    }
                    continue;
                }

                // Show quit confirmation on Q or Esc
                if matches!(
                    key.code,
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
                ) {
                    wizard.show_quit_confirm = true;
                    continue;
                }

                let action = handle_step_event(wizard, key);

                match action {
                    StepAction::NextStep => wizard.advance(),
                    StepAction::PrevStep => wizard.retreat(),
                    StepAction::Complete(result) => return Ok(result),
                    StepAction::Stay => {}
                }
            }
        }
    }
}

fn handle_step_event(wizard: &mut WizardState, key: KeyEvent) -> StepAction {
    match wizard.current_step().cloned() {
        Some(WizardStep::Intro) => handle_intro(key),
        Some(WizardStep::CurrentCountry { .. }) => handle_current_country(wizard, key),
        Some(WizardStep::CurrentLevel { .. }) => handle_current_level(wizard, key),
        Some(WizardStep::StudyMode { .. }) => handle_study_mode(wizard, key),
        Some(WizardStep::Mobility { .. }) => handle_mobility(wizard, key),
        Some(WizardStep::Finance { .. }) => handle_finance(wizard, key),
        Some(WizardStep::Interests { .. }) => handle_interests(wizard, key),
        Some(WizardStep::Results) => handle_results(wizard, key),
        None => StepAction::Stay,
    }
}

// ============================================================================
// Event Handlers
// ============================================================================

fn handle_intro(key: KeyEvent) -> StepAction {
    match key.code {
        KeyCode::Enter => StepAction::NextStep,
        _ => StepAction::Stay,
    }
}

/// Shared cursor movement for single-select screens.
fn move_cursor(selected: &mut usize, key: KeyCode, len: usize) -> bool {
    match key {
        KeyCode::Up => {
            *selected = selected.saturating_sub(1);
            true
        }
        KeyCode::Down => {
            if *selected + 1 < len {
                *selected += 1;
            }
            true
        }
        _ => false,
    }
}

fn handle_current_country(wizard: &mut WizardState, key: KeyEvent) -> StepAction {
    let selected = match wizard.current_step_mut() {
        Some(WizardStep::CurrentCountry { selected }) => selected,
        _ => return StepAction::Stay,
    };

    if move_cursor(selected, key.code, Country::ALL.len()) {
        return StepAction::Stay;
    }
    match key.code {
        KeyCode::Char(' ') => {
            let choice = Country::ALL[*selected];
            wizard.answers.set_home_country(choice);
            StepAction::Stay
        }
        KeyCode::Enter => {
            let choice = Country::ALL[*selected];
            wizard.answers.set_home_country(choice);
            StepAction::NextStep
        }
        KeyCode::Backspace => StepAction::PrevStep,
        _ => StepAction::Stay,
    }
}

fn handle_current_level(wizard: &mut WizardState, key: KeyEvent) -> StepAction {
    let selected = match wizard.current_step_mut() {
        Some(WizardStep::CurrentLevel { selected }) => selected,
        _ => return StepAction::Stay,
    };

    if move_cursor(selected, key.code, EqfBand::ALL.len()) {
        return StepAction::Stay;
    }
    match key.code {
        KeyCode::Char(' ') => {
            let choice = EqfBand::ALL[*selected];
            wizard.answers.set_current_level(choice);
            StepAction::Stay
        }
        KeyCode::Enter => {
            let choice = EqfBand::ALL[*selected];
            wizard.answers.set_current_level(choice);
            StepAction::NextStep
        }
        KeyCode::Backspace => StepAction::PrevStep,
        _ => StepAction::Stay,
    }
}

fn handle_study_mode(wizard: &mut WizardState, key: KeyEvent) -> StepAction {
    let selected = match wizard.current_step_mut() {
        Some(WizardStep::StudyMode { selected }) => selected,
        _ => return StepAction::Stay,
    };

    if move_cursor(selected, key.code, StudyMode::ALL.len()) {
        return StepAction::Stay;
    }
    match key.code {
        KeyCode::Char(' ') => {
            let choice = StudyMode::ALL[*selected];
            wizard.answers.set_study_mode(choice);
            StepAction::Stay
        }
        KeyCode::Enter => {
            let choice = StudyMode::ALL[*selected];
            wizard.answers.set_study_mode(choice);
            StepAction::NextStep
        }
        KeyCode::Backspace => StepAction::PrevStep,
        _ => StepAction::Stay,
    }
}

fn handle_mobility(wizard: &mut WizardState, key: KeyEvent) -> StepAction {
    let (focus, cursor) = match wizard.current_step_mut() {
        Some(WizardStep::Mobility { focus, cursor }) => (focus, cursor),
        _ => return StepAction::Stay,
    };

    // Pane lengths: destinations list has the sentinel at index 0.
    let pane_len = match *focus {
        MobilityFocus::Destinations => Country::ALL.len() + 1,
        MobilityFocus::Accommodation => AccommodationOption::ALL.len(),
    };

    match key.code {
        KeyCode::Tab => {
            *focus = match *focus {
                MobilityFocus::Destinations => MobilityFocus::Accommodation,
                MobilityFocus::Accommodation => MobilityFocus::Destinations,
            };
            *cursor = 0;
            StepAction::Stay
        }
        KeyCode::Up => {
            *cursor = cursor.saturating_sub(1);
            StepAction::Stay
        }
        KeyCode::Down => {
            if *cursor + 1 < pane_len {
                *cursor += 1;
            }
            StepAction::Stay
        }
        KeyCode::Char(' ') => {
            let (focus, cursor) = (*focus, *cursor);
            match focus {
                MobilityFocus::Destinations => {
                    if cursor == 0 {
                        wizard.answers.toggle_not_sure();
                    } else {
                        wizard.answers.toggle_destination(Country::ALL[cursor - 1]);
                    }
                }
                MobilityFocus::Accommodation => {
                    wizard
                        .answers
                        .toggle_accommodation(AccommodationOption::ALL[cursor]);
                }
            }
            StepAction::Stay
        }
        // Ungated step: an empty selection is valid and triggers the
        // resolver's default fallback.
        KeyCode::Enter => StepAction::NextStep,
        KeyCode::Backspace => StepAction::PrevStep,
        _ => StepAction::Stay,
    }
}

fn handle_finance(wizard: &mut WizardState, key: KeyEvent) -> StepAction {
    let (focus, cursor) = match wizard.current_step_mut() {
        Some(WizardStep::Finance { focus, cursor }) => (focus, cursor),
        _ => return StepAction::Stay,
    };

    // Support pane carries a trailing "none of these apply" entry.
    let pane_len = match *focus {
        FinanceFocus::Funding => FundingProfile::ALL.len(),
        FinanceFocus::Support => SupportFlag::ALL.len() + 1,
        FinanceFocus::Cost => CostPreference::ALL.len(),
    };

    match key.code {
        KeyCode::Tab => {
            *focus = match *focus {
                FinanceFocus::Funding => FinanceFocus::Support,
                FinanceFocus::Support => FinanceFocus::Cost,
                FinanceFocus::Cost => FinanceFocus::Funding,
            };
            *cursor = 0;
            StepAction::Stay
        }
        KeyCode::Up => {
            *cursor = cursor.saturating_sub(1);
            StepAction::Stay
        }
        KeyCode::Down => {
            if *cursor + 1 < pane_len {
                *cursor += 1;
            }
            StepAction::Stay
        }
        KeyCode::Char(' ') => {
            let (focus, cursor) = (*focus, *cursor);
            match focus {
                FinanceFocus::Funding => {
                    wizard.answers.set_funding(FundingProfile::ALL[cursor]);
                }
                FinanceFocus::Support => {
                    if cursor == SupportFlag::ALL.len() {
                        wizard.answers.clear_support();
                    } else {
                        wizard.answers.toggle_support(SupportFlag::ALL[cursor]);
                    }
                }
                FinanceFocus::Cost => {
                    wizard.answers.set_cost(CostPreference::ALL[cursor]);
                }
            }
            StepAction::Stay
        }
        // Gated on funding + cost; advance() refuses while incomplete.
        KeyCode::Enter => StepAction::NextStep,
        KeyCode::Backspace => StepAction::PrevStep,
        _ => StepAction::Stay,
    }
}

fn handle_interests(wizard: &mut WizardState, key: KeyEvent) -> StepAction {
    let cursor = match wizard.current_step_mut() {
        Some(WizardStep::Interests { cursor }) => cursor,
        _ => return StepAction::Stay,
    };

    match key.code {
        KeyCode::Up => {
            *cursor = cursor.saturating_sub(1);
            StepAction::Stay
        }
        KeyCode::Down => {
            if *cursor + 1 < Sector::ALL.len() {
                *cursor += 1;
            }
            StepAction::Stay
        }
        KeyCode::Char(' ') => {
            let cursor = *cursor;
            wizard.answers.toggle_interest(Sector::ALL[cursor]);
            StepAction::Stay
        }
        // Gated on at least one interest.
        KeyCode::Enter => StepAction::NextStep,
        KeyCode::Backspace => StepAction::PrevStep,
        _ => StepAction::Stay,
    }
}

fn handle_results(wizard: &WizardState, key: KeyEvent) -> StepAction {
    match key.code {
        KeyCode::Enter => {
            StepAction::Complete(WizardResult::Complete(wizard.answers.clone()))
        }
        KeyCode::Backspace => StepAction::PrevStep,
        _ => StepAction::Stay,
    }
}

// ============================================================================
// Rendering Helpers
// ============================================================================

/// Create a centered rectangle with fixed dimensions
fn centered_fixed_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.width.saturating_sub(width) / 2;
    let y = area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Get semantic color for a step
fn step_color(step: &WizardStep) -> Color {
    match step {
        WizardStep::CurrentCountry { .. } | WizardStep::CurrentLevel { .. } => Color::Magenta,
        WizardStep::StudyMode { .. } | WizardStep::Mobility { .. } => Color::Yellow,
        WizardStep::Finance { .. } | WizardStep::Interests { .. } => Color::Green,
        WizardStep::Intro | WizardStep::Results => Color::Cyan,
    }
}

// ============================================================================
// Main Rendering Functions
// ============================================================================

/// Render the complete wizard UI with persistent shell layout
fn render_wizard(f: &mut Frame, wizard: &WizardState) {
    let area = f.area();

    let logo_height = 8u16;
    let hint_height = 1u16;

    let box_width = 72u16;
    let ideal_box_height = 24u16;
    let box_height =
        ideal_box_height.min(area.height.saturating_sub(logo_height + hint_height + 2));

    // Center the whole unit vertically
    let total_height = logo_height + box_height + hint_height;
    let x = area.width.saturating_sub(box_width) / 2;
    let y = area.height.saturating_sub(total_height) / 2;

    let logo_area = Rect::new(x, y, box_width.min(area.width), logo_height);
    render_logo(f, logo_area);

    let box_y = y + logo_height;
    let box_area = Rect::new(x, box_y, box_width.min(area.width), box_height.max(10));
    f.render_widget(Clear, box_area);

    let color = wizard.current_step().map(step_color).unwrap_or(Color::Cyan);

    let current = wizard.current_index + 1;
    let total = wizard.steps.len();
    let step_title = wizard
        .current_step()
        .map(|s| s.title())
        .unwrap_or("Unknown");
    let title_text = if wizard.step_tag().active_index().is_some() {
        format!(
            " Step {}/{} \u{00b7} {} \u{00b7} {:.0}% ",
            current,
            total,
            step_title,
            wizard.progress()
        )
    } else {
        format!(" Step {}/{} \u{00b7} {} ", current, total, step_title)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title_text)
        .title_style(Style::default().fg(color).bold())
        .title_alignment(Alignment::Center);

    let inner = block.inner(box_area);
    f.render_widget(block, box_area);

    render_step(f, inner, wizard);

    let hint_y = box_area.y + box_area.height;
    let hint_area = Rect::new(x, hint_y, box_width.min(area.width), 1);
    render_help_bar(f, hint_area, wizard);

    if wizard.show_quit_confirm {
        render_quit_confirm_overlay(f);
    }
}

/// Render logo
fn render_logo(f: &mut Frame, area: Rect) {
    let logo_lines = vec![
        Line::from(Span::styled(
            "██████╗  █████╗ ████████╗██╗  ██╗",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            "██╔══██╗██╔══██╗╚══██╔══╝██║  ██║",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            "██████╔╝███████║   ██║   ███████║",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            "██╔═══╝ ██╔══██║   ██║   ██╔══██║",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            "██║     ██║  ██║   ██║   ██║  ██║",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            "╚═╝     ╚═╝  ╚═╝   ╚═╝   ╚═╝  ╚═╝",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("➜ ", Style::default().fg(Color::Magenta).bold()),
            Span::styled(
                "Find your route through European education",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    let logo_paragraph = Paragraph::new(logo_lines).alignment(Alignment::Center);
    f.render_widget(logo_paragraph, area);
}

/// Render the current step inside the shell box
fn render_step(f: &mut Frame, area: Rect, wizard: &WizardState) {
    let step = match wizard.current_step() {
        Some(s) => s,
        None => {
            let paragraph = Paragraph::new("Error: No current step").alignment(Alignment::Center);
            f.render_widget(paragraph, area);
            return;
        }
    };

    match step {
        WizardStep::Intro => render_intro(f, area),
        WizardStep::CurrentCountry { .. } => render_current_country(f, area, wizard),
        WizardStep::CurrentLevel { .. } => render_current_level(f, area, wizard),
        WizardStep::StudyMode { .. } => render_study_mode(f, area, wizard),
        WizardStep::Mobility { .. } => render_mobility(f, area, wizard),
        WizardStep::Finance { .. } => render_finance(f, area, wizard),
        WizardStep::Interests { .. } => render_interests(f, area, wizard),
        WizardStep::Results => render_results(f, area, wizard),
    }
}

/// Render help bar with context-appropriate shortcuts
fn render_help_bar(f: &mut Frame, area: Rect, wizard: &WizardState) {
    let step = wizard.current_step();
    let has_panes = matches!(
        step,
        Some(WizardStep::Mobility { .. }) | Some(WizardStep::Finance { .. })
    );
    let has_toggle = matches!(
        step,
        Some(WizardStep::CurrentCountry { .. })
            | Some(WizardStep::CurrentLevel { .. })
            | Some(WizardStep::StudyMode { .. })
            | Some(WizardStep::Mobility { .. })
            | Some(WizardStep::Finance { .. })
            | Some(WizardStep::Interests { .. })
    );

    let mut spans = vec![];

    spans.push(Span::styled("  Enter", Style::default().fg(Color::Cyan)));
    if wizard.is_last_step() {
        spans.push(Span::styled(
            " see recommendations  ",
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(
            " next  ",
            Style::default().fg(Color::DarkGray),
        ));
    }

    if has_toggle {
        spans.push(Span::styled("Space", Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            " select  ",
            Style::default().fg(Color::DarkGray),
        ));
    }

    if has_panes {
        spans.push(Span::styled("Tab", Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            " switch pane  ",
            Style::default().fg(Color::DarkGray),
        ));
    }

    if wizard.current_index > 0 {
        spans.push(Span::styled("Bksp", Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            " back  ",
            Style::default().fg(Color::DarkGray),
        ));
    }

    spans.push(Span::styled("Q/Esc", Style::default().fg(Color::Cyan)));
    spans.push(Span::styled(" quit", Style::default().fg(Color::DarkGray)));

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Render quit confirmation overlay
fn render_quit_confirm_overlay(f: &mut Frame) {
    let popup = centered_fixed_rect(40, 8, f.area());
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Quit? ")
        .title_style(Style::default().fg(Color::Red).bold())
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Quit without seeing your results?",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("      ", Style::default()),
            Span::styled("Y", Style::default().fg(Color::Cyan)),
            Span::styled(" yes  ", Style::default().fg(Color::DarkGray)),
            Span::styled("N", Style::default().fg(Color::Cyan)),
            Span::styled(" no", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    f.render_widget(Paragraph::new(content), inner);
}

// ============================================================================
// Step Renderers
// ============================================================================

fn render_intro(f: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Find Your Educational Journey",
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  This tool helps you discover study routes across Europe based",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "  on your current qualifications, plans and interests. Answer a",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "  few questions to get per-country recommendations.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::styled(" to start exploring", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    f.render_widget(Paragraph::new(content), area);
}

/// Render a single-select list: cursor highlight plus a dot marker on the
/// currently recorded answer.
fn render_single_list(
    f: &mut Frame,
    area: Rect,
    prompt: &str,
    labels: &[&str],
    cursor: usize,
    chosen: Option<usize>,
    color: Color,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        format!("  {}", prompt),
        Style::default().fg(Color::DarkGray),
    )));
    f.render_widget(title, chunks[0]);

    let max_visible = chunks[1].height as usize;
    let start_idx = if cursor >= max_visible {
        cursor - max_visible + 1
    } else {
        0
    };

    let items: Vec<ListItem> = labels
        .iter()
        .enumerate()
        .skip(start_idx)
        .take(max_visible)
        .map(|(i, label)| {
            let marker = if chosen == Some(i) { "\u{25cf}" } else { " " };
            let style = if i == cursor {
                Style::default().fg(Color::Black).bg(color).bold()
            } else if chosen == Some(i) {
                Style::default().fg(color)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("  {} {}", marker, label)).style(style)
        })
        .collect();

    let list = List::new(items);
    let mut list_state = ListState::default();
    list_state.select(Some(cursor.saturating_sub(start_idx)));
    f.render_stateful_widget(list, chunks[1], &mut list_state);
}

/// Render a checkbox list pane inside a bordered block.
#[allow(clippy::too_many_arguments)]
fn render_check_pane(
    f: &mut Frame,
    area: Rect,
    title: &str,
    labels: &[String],
    checked: &[bool],
    cursor: usize,
    focused: bool,
    color: Color,
) {
    let border_color = if focused { color } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let max_visible = inner.height as usize;
    let start_idx = if focused && cursor >= max_visible {
        cursor - max_visible + 1
    } else {
        0
    };

    let items: Vec<ListItem> = labels
        .iter()
        .enumerate()
        .skip(start_idx)
        .take(max_visible)
        .map(|(i, label)| {
            let is_checked = checked.get(i).copied().unwrap_or(false);
            let checkbox = if is_checked { "[x]" } else { "[ ]" };
            let style = if focused && i == cursor {
                Style::default().fg(Color::Black).bg(color).bold()
            } else if is_checked {
                Style::default().fg(color)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!(" {} {}", checkbox, label)).style(style)
        })
        .collect();

    let list = List::new(items);
    let mut list_state = ListState::default();
    list_state.select(Some(cursor.saturating_sub(start_idx)));
    f.render_stateful_widget(list, inner, &mut list_state);
}

fn render_current_country(f: &mut Frame, area: Rect, wizard: &WizardState) {
    let cursor = match wizard.current_step() {
        Some(WizardStep::CurrentCountry { selected }) => *selected,
        _ => return,
    };
    let labels: Vec<&str> = Country::ALL.iter().map(|c| c.label()).collect();
    let chosen = wizard
        .answers
        .home_country
        .and_then(|c| Country::ALL.iter().position(|x| *x == c));
    render_single_list(
        f,
        area,
        "Where do you currently live?",
        &labels,
        cursor,
        chosen,
        Color::Magenta,
    );
}

fn render_current_level(f: &mut Frame, area: Rect, wizard: &WizardState) {
    let cursor = match wizard.current_step() {
        Some(WizardStep::CurrentLevel { selected }) => *selected,
        _ => return,
    };
    let labels: Vec<&str> = EqfBand::ALL.iter().map(|b| b.label()).collect();
    let chosen = wizard
        .answers
        .current_level
        .and_then(|b| EqfBand::ALL.iter().position(|x| *x == b));
    render_single_list(
        f,
        area,
        "What's the highest qualification level you currently hold?",
        &labels,
        cursor,
        chosen,
        Color::Magenta,
    );
}

fn render_study_mode(f: &mut Frame, area: Rect, wizard: &WizardState) {
    let cursor = match wizard.current_step() {
        Some(WizardStep::StudyMode { selected }) => *selected,
        _ => return,
    };
    let labels: Vec<&str> = StudyMode::ALL.iter().map(|m| m.label()).collect();
    let chosen = wizard
        .answers
        .study_mode
        .and_then(|m| StudyMode::ALL.iter().position(|x| *x == m));
    render_single_list(
        f,
        area,
        "How do you want to study?",
        &labels,
        cursor,
        chosen,
        Color::Yellow,
    );
}

fn render_mobility(f: &mut Frame, area: Rect, wizard: &WizardState) {
    let (focus, cursor) = match wizard.current_step() {
        Some(WizardStep::Mobility { focus, cursor }) => (*focus, *cursor),
        _ => return,
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    // Destination pane: sentinel first, then the country set.
    let mut dest_labels = vec!["Not sure yet".to_string()];
    dest_labels.extend(Country::ALL.iter().map(|c| c.label().to_string()));
    let mut dest_checked = vec![wizard.answers.not_sure_destination];
    dest_checked.extend(
        Country::ALL
            .iter()
            .map(|c| wizard.answers.destinations.contains(c)),
    );
    render_check_pane(
        f,
        columns[0],
        "Destinations (optional)",
        &dest_labels,
        &dest_checked,
        cursor,
        focus == MobilityFocus::Destinations,
        Color::Yellow,
    );

    let acc_labels: Vec<String> = AccommodationOption::ALL
        .iter()
        .map(|o| o.label().to_string())
        .collect();
    let acc_checked: Vec<bool> = AccommodationOption::ALL
        .iter()
        .map(|o| wizard.answers.accommodation.contains(o))
        .collect();
    render_check_pane(
        f,
        columns[1],
        "Accommodation",
        &acc_labels,
        &acc_checked,
        cursor,
        focus == MobilityFocus::Accommodation,
        Color::Yellow,
    );
}

fn render_finance(f: &mut Frame, area: Rect, wizard: &WizardState) {
    let (focus, cursor) = match wizard.current_step() {
        Some(WizardStep::Finance { focus, cursor }) => (*focus, *cursor),
        _ => return,
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(36),
            Constraint::Percentage(36),
            Constraint::Percentage(28),
        ])
        .split(area);

    let funding_labels: Vec<String> = FundingProfile::ALL
        .iter()
        .map(|p| p.label().to_string())
        .collect();
    let funding_checked: Vec<bool> = FundingProfile::ALL
        .iter()
        .map(|p| wizard.answers.funding == Some(*p))
        .collect();
    render_check_pane(
        f,
        columns[0],
        "Funding",
        &funding_labels,
        &funding_checked,
        cursor,
        focus == FinanceFocus::Funding,
        Color::Green,
    );

    let mut support_labels: Vec<String> = SupportFlag::ALL
        .iter()
        .map(|t| t.label().to_string())
        .collect();
    support_labels.push("None of these apply".to_string());
    let mut support_checked: Vec<bool> = SupportFlag::ALL
        .iter()
        .map(|t| wizard.answers.support.contains(t))
        .collect();
    support_checked.push(wizard.answers.support.is_empty());
    render_check_pane(
        f,
        columns[1],
        "Circumstances",
        &support_labels,
        &support_checked,
        cursor,
        focus == FinanceFocus::Support,
        Color::Green,
    );

    let cost_labels: Vec<String> = CostPreference::ALL
        .iter()
        .map(|p| p.label().to_string())
        .collect();
    let cost_checked: Vec<bool> = CostPreference::ALL
        .iter()
        .map(|p| wizard.answers.cost == Some(*p))
        .collect();
    render_check_pane(
        f,
        columns[2],
        "Cost vs opportunity",
        &cost_labels,
        &cost_checked,
        cursor,
        focus == FinanceFocus::Cost,
        Color::Green,
    );
}

fn render_interests(f: &mut Frame, area: Rect, wizard: &WizardState) {
    let cursor = match wizard.current_step() {
        Some(WizardStep::Interests { cursor }) => *cursor,
        _ => return,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        "  Which sectors interest you? Choose at least one.",
        Style::default().fg(Color::DarkGray),
    )));
    f.render_widget(title, chunks[0]);

    let labels: Vec<String> = Sector::ALL.iter().map(|s| s.label().to_string()).collect();
    let checked: Vec<bool> = Sector::ALL
        .iter()
        .map(|s| wizard.answers.interests.contains(s))
        .collect();

    let items: Vec<ListItem> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let checkbox = if checked[i] { "[x]" } else { "[ ]" };
            let style = if i == cursor {
                Style::default().fg(Color::Black).bg(Color::Green).bold()
            } else if checked[i] {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("  {} {}", checkbox, label)).style(style)
        })
        .collect();

    let list = List::new(items);
    let mut list_state = ListState::default();
    list_state.select(Some(cursor));
    f.render_stateful_widget(list, chunks[1], &mut list_state);
}

fn render_results(f: &mut Frame, area: Rect, wizard: &WizardState) {
    let answers = &wizard.answers;
    let color = Color::Cyan;

    let fmt_opt = |value: Option<String>| value.unwrap_or_else(|| "\u{2014}".to_string());
    let fmt_set = |items: Vec<String>| {
        if items.is_empty() {
            "\u{2014}".to_string()
        } else {
            items.join(", ")
        }
    };

    let destinations = if answers.not_sure_destination || answers.destinations.is_empty() {
        "Not sure yet (default suggestions)".to_string()
    } else {
        fmt_set(
            answers
                .destinations
                .iter()
                .map(|c| c.label().to_string())
                .collect(),
        )
    };

    let rows = [
        ("Home country", fmt_opt(answers.home_country.map(|v| v.label().to_string()))),
        ("Level", fmt_opt(answers.current_level.map(|v| v.label().to_string()))),
        ("Study mode", fmt_opt(answers.study_mode.map(|v| v.label().to_string()))),
        ("Destinations", destinations),
        ("Funding", fmt_opt(answers.funding.map(|v| v.label().to_string()))),
        (
            "Circumstances",
            fmt_set(answers.support.iter().map(|v| v.label().to_string()).collect()),
        ),
        (
            "Accommodation",
            fmt_set(
                answers
                    .accommodation
                    .iter()
                    .map(|v| v.label().to_string())
                    .collect(),
            ),
        ),
        ("Cost preference", fmt_opt(answers.cost.map(|v| v.label().to_string()))),
        (
            "Interests",
            fmt_set(answers.interests.iter().map(|v| v.label().to_string()).collect()),
        ),
    ];

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Your Profile",
            Style::default().fg(Color::DarkGray).bold(),
        )),
        Line::from(""),
    ];
    for (label, value) in rows {
        content.push(Line::from(vec![
            Span::styled(format!("  {:<16}", label), Style::default().fg(Color::DarkGray)),
            Span::styled(value, Style::default().fg(color)),
        ]));
    }
    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::styled("  Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(
            " to see your recommendations",
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    f.render_widget(Paragraph::new(content), area);
}
