//! # Actions
//!
//! Everything that can happen in the converter becomes an `Action`.
//! User presses ↑ or `k`? That's `Action::Up`. Enter or space? `Action::Select`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state in place and returns an `Effect` telling the caller what to do
//! next. No I/O here. Drawing and exiting happen in the TUI.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::convert::ConversionOption;
use crate::core::state::{App, Screen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Select,
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Leave immediately.
    Quit,
    /// Draw the current frame one last time, then leave.
    Finish,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?} on {:?}", action, app.kind());

    let options = ConversionOption::ALL;
    let last = options.len() - 1;
    let settings = app.settings;

    match (&mut app.screen, action) {
        (_, Action::Quit) => return Effect::Quit,

        (Screen::SelectingConversion { cursor }, Action::Up) => {
            *cursor = cursor.saturating_sub(1);
        }
        (Screen::SelectingConversion { cursor }, Action::Down) => {
            *cursor = (*cursor + 1).min(last);
        }
        (Screen::SelectingConversion { cursor }, Action::Select) => {
            let option = options[*cursor];
            debug!("Chose {:?}", option);
            app.screen = Screen::EditingInput {
                option,
                input: settings.start_value,
            };
        }

        (Screen::EditingInput { input, .. }, Action::Up) => {
            *input = input.saturating_add(1);
        }
        (Screen::EditingInput { input, .. }, Action::Down) => {
            *input = input.saturating_sub(1);
        }
        (Screen::EditingInput { option, input }, Action::Select) => {
            let (option, input) = (*option, *input);
            let output = app.conversion_text(option, input);
            debug!("Converted: {}", output);
            app.screen = Screen::ShowingResult {
                option,
                input,
                output,
            };
            if settings.exit_on_result {
                return Effect::Finish;
            }
        }

        (Screen::ShowingResult { option, input, .. }, Action::Up | Action::Down)
            if !settings.freeze_result =>
        {
            let step = if action == Action::Up { 1 } else { -1 };
            let (option, input) = (*option, input.saturating_add(step));
            debug!("Reopened input for {:?} at {}", option, input);
            app.screen = Screen::EditingInput { option, input };
        }
        (Screen::ShowingResult { .. }, _) => {}
    }

    Effect::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SymbolStyle;
    use crate::core::state::{ScreenKind, SessionSettings};

    fn run(app: &mut App, actions: &[Action]) -> Vec<Effect> {
        actions.iter().map(|&a| update(app, a)).collect()
    }

    fn editing(option: ConversionOption, input: i64) -> App {
        let mut app = App::default();
        app.screen = Screen::EditingInput { option, input };
        app
    }

    #[test]
    fn test_down_twice_selects_felsius_to_celsius() {
        let mut app = App::default();
        run(&mut app, &[Action::Down, Action::Down]);
        assert_eq!(app.cursor_index(), Some(2));
        assert_eq!(ConversionOption::ALL[2].label(), "Felsius to Celsius");

        let effect = update(&mut app, Action::Select);
        assert_eq!(effect, Effect::None);
        assert_eq!(app.kind(), ScreenKind::EditingInput);
        assert_eq!(app.chosen_option(), Some(ConversionOption::FelsiusToCelsius));
        assert_eq!(app.input_value(), Some(0));
    }

    #[test]
    fn test_cursor_clamps_at_top() {
        let mut app = App::default();
        run(&mut app, &[Action::Up, Action::Up, Action::Up]);
        assert_eq!(app.cursor_index(), Some(0));
    }

    #[test]
    fn test_cursor_clamps_at_bottom() {
        let mut app = App::default();
        run(&mut app, &[Action::Down; 10]);
        assert_eq!(app.cursor_index(), Some(3));
        update(&mut app, Action::Up);
        assert_eq!(app.cursor_index(), Some(2));
    }

    #[test]
    fn test_cursor_stays_in_range_for_mixed_sequences() {
        // Deterministic pseudo-random walk over up/down
        let mut app = App::default();
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..2_000 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let action = if seed % 2 == 0 { Action::Up } else { Action::Down };
            update(&mut app, action);
            let cursor = app.cursor_index().unwrap();
            assert!(cursor <= 3);
        }
    }

    #[test]
    fn test_input_steps_up_and_down() {
        let mut app = editing(ConversionOption::CelsiusToFelsius, 0);
        run(&mut app, &[Action::Up, Action::Up, Action::Up, Action::Down]);
        assert_eq!(app.input_value(), Some(2));

        run(&mut app, &[Action::Down; 5]);
        assert_eq!(app.input_value(), Some(-3));
        assert_eq!(app.output_text(), None);
    }

    #[test]
    fn test_input_saturates_instead_of_overflowing() {
        let mut app = editing(ConversionOption::CelsiusToFelsius, i64::MAX);
        update(&mut app, Action::Up);
        assert_eq!(app.input_value(), Some(i64::MAX));
    }

    #[test]
    fn test_select_celsius_to_felsius_at_zero() {
        let mut app = editing(ConversionOption::CelsiusToFelsius, 0);
        assert_eq!(app.output_text(), None);
        update(&mut app, Action::Select);
        assert_eq!(app.kind(), ScreenKind::ShowingResult);
        assert_eq!(app.output_text(), Some("0°c = 16°ϵ"));
    }

    #[test]
    fn test_select_felsius_to_fahrenheit_at_seven() {
        let mut app = editing(ConversionOption::FelsiusToFahrenheit, 7);
        update(&mut app, Action::Select);
        assert_eq!(app.output_text(), Some("7°ϵ = 20°f"));
    }

    #[test]
    fn test_output_unset_until_select_after_choice() {
        let mut app = App::default();
        run(&mut app, &[Action::Down, Action::Select]);
        assert_eq!(app.chosen_option(), Some(ConversionOption::FahrenheitToFelsius));
        assert_eq!(app.output_text(), None);

        run(&mut app, &[Action::Up, Action::Up]);
        assert_eq!(app.output_text(), None);

        update(&mut app, Action::Select);
        assert!(app.output_text().is_some());
    }

    #[test]
    fn test_result_is_frozen_by_default() {
        let mut app = editing(ConversionOption::FelsiusToCelsius, 16);
        update(&mut app, Action::Select);
        let before = app.clone();

        let effects = run(&mut app, &[Action::Up, Action::Down, Action::Select]);
        assert!(effects.iter().all(|e| *e == Effect::None));
        assert_eq!(app, before);
        assert_eq!(app.output_text(), Some("16°ϵ = 0°c"));
    }

    #[test]
    fn test_unfrozen_result_reopens_input() {
        let mut app = App::new(SessionSettings {
            freeze_result: false,
            ..Default::default()
        });
        app.screen = Screen::EditingInput {
            option: ConversionOption::CelsiusToFelsius,
            input: 10,
        };
        update(&mut app, Action::Select);
        assert_eq!(app.output_text(), Some("10°c = 30°ϵ"));

        update(&mut app, Action::Down);
        assert_eq!(app.kind(), ScreenKind::EditingInput);
        assert_eq!(app.input_value(), Some(9));
        assert_eq!(app.output_text(), None);
        assert_eq!(app.chosen_option(), Some(ConversionOption::CelsiusToFelsius));
    }

    #[test]
    fn test_unfrozen_result_ignores_select() {
        let mut app = App::new(SessionSettings {
            freeze_result: false,
            ..Default::default()
        });
        app.screen = Screen::EditingInput {
            option: ConversionOption::CelsiusToFelsius,
            input: 0,
        };
        update(&mut app, Action::Select);
        let before = app.clone();
        update(&mut app, Action::Select);
        assert_eq!(app, before);
    }

    #[test]
    fn test_start_value_is_used_when_input_opens() {
        let mut app = App::new(SessionSettings {
            start_value: -42,
            ..Default::default()
        });
        update(&mut app, Action::Select);
        assert_eq!(app.input_value(), Some(-42));
    }

    #[test]
    fn test_exit_on_result_finishes() {
        let mut app = App::new(SessionSettings {
            exit_on_result: true,
            ..Default::default()
        });
        let effects = run(&mut app, &[Action::Select, Action::Select]);
        assert_eq!(effects, vec![Effect::None, Effect::Finish]);
        assert_eq!(app.output_text(), Some("0°c = 16°ϵ"));
    }

    #[test]
    fn test_legacy_symbols_flow_through_update() {
        let mut app = App::new(SessionSettings {
            symbols: SymbolStyle::LegacyCelsius,
            ..Default::default()
        });
        app.screen = Screen::EditingInput {
            option: ConversionOption::FelsiusToFahrenheit,
            input: 7,
        };
        update(&mut app, Action::Select);
        assert_eq!(app.output_text(), Some("7°ϵ = 20°c"));
    }

    #[test]
    fn test_quit_from_every_screen_leaves_state_untouched() {
        let mut selecting = App::default();
        update(&mut selecting, Action::Down);

        let editing_app = editing(ConversionOption::FahrenheitToFelsius, 5);

        let mut showing = editing(ConversionOption::FelsiusToFahrenheit, 7);
        update(&mut showing, Action::Select);

        for mut app in [selecting, editing_app, showing] {
            let before = app.clone();
            assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
            assert_eq!(app, before);
        }
    }
}
