//! Property-based tests for the calculator controller

use calc_core::token::{Function, Token};
use calc_core::{AngleUnit, Calculator, Command, ERROR_MARKER, ZERO_SENTINEL};
use proptest::prelude::*;

// ===== Strategy definitions =====

/// Literal tokens other than a lone "0" (which would itself be replaced)
fn literal_strategy() -> impl Strategy<Value = Token> {
    prop_oneof![
        (1u8..=9u8).prop_map(|d| Token::from(char::from(b'0' + d))),
        Just(Token::from("00")),
        Just(Token::from('.')),
        Just(Token::from('+')),
        Just(Token::from('-')),
        Just(Token::from('*')),
        Just(Token::from('/')),
        Just(Token::from('^')),
        Just(Token::from('(')),
        Just(Token::from(')')),
        Just(Token::from("×")),
        Just(Token::from("π")),
    ]
}

fn function_strategy() -> impl Strategy<Value = Token> {
    (0usize..Function::ALL.len()).prop_map(|i| Token::Function(Function::ALL[i]))
}

fn token_strategy() -> impl Strategy<Value = Token> {
    prop_oneof![3 => literal_strategy(), 1 => function_strategy()]
}

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        token_strategy().prop_map(Command::Insert),
        Just(Command::ClearAll),
        Just(Command::DeleteOne),
        Just(Command::Evaluate),
        Just(Command::MemoryAdd),
        Just(Command::MemorySubtract),
        Just(Command::MemoryRecall),
        Just(Command::MemoryClear),
        Just(Command::ToggleAngleUnit),
        Just(Command::ToggleShift),
        (0usize..12).prop_map(Command::RecallHistory),
    ]
}

proptest! {
    /// Inserting from the sentinel concatenates token text
    #[test]
    fn prop_insert_concatenates(tokens in prop::collection::vec(token_strategy(), 1..20)) {
        let mut calc = Calculator::new();
        let mut expected = String::new();
        for token in tokens {
            expected.push_str(&token.text());
            calc.insert(token);
        }
        prop_assert_eq!(calc.display(), expected.as_str());
    }

    /// No command sequence can leave the display empty or overfill history
    #[test]
    fn prop_display_never_empty(commands in prop::collection::vec(command_strategy(), 0..60)) {
        let mut calc = Calculator::new();
        for command in commands {
            calc.apply(command);
            prop_assert!(!calc.display().is_empty());
            prop_assert!(calc.history().len() <= 10);
        }
    }

    /// clear_all always lands on the sentinel
    #[test]
    fn prop_clear_all_resets(commands in prop::collection::vec(command_strategy(), 0..30)) {
        let mut calc = Calculator::new();
        for command in commands {
            calc.apply(command);
        }
        calc.clear_all();
        prop_assert_eq!(calc.display(), ZERO_SENTINEL);
        calc.clear_all();
        prop_assert_eq!(calc.display(), ZERO_SENTINEL);
    }

    /// Toggling the angle unit never changes the display text
    #[test]
    fn prop_angle_toggle_keeps_display(tokens in prop::collection::vec(token_strategy(), 0..10)) {
        let mut calc = Calculator::new();
        for token in tokens {
            calc.insert(token);
        }
        let before = calc.display().to_string();
        calc.toggle_angle_unit();
        prop_assert_eq!(calc.display(), before.as_str());
        prop_assert_eq!(calc.angle_unit(), AngleUnit::Radians);
    }

    /// A failed evaluation never touches history
    #[test]
    fn prop_failure_keeps_history(a in 1u32..1000) {
        let mut calc = Calculator::new();
        calc.insert(a.to_string().as_str());
        calc.insert("/0");
        let _ = calc.evaluate_expression();
        prop_assert_eq!(calc.display(), ERROR_MARKER);
        prop_assert!(calc.history().is_empty());
    }

    /// Integer addition shows the exact sum
    #[test]
    fn prop_integer_addition(a in 0i64..1_000_000, b in 0i64..1_000_000) {
        let mut calc = Calculator::new();
        calc.insert(format!("{a}+{b}").as_str());
        let _ = calc.evaluate_expression();
        let expected = (a + b).to_string();
        prop_assert_eq!(calc.display(), expected.as_str());
    }
}
