//! Integration tests for termpick-core
//!
//! These tests drive complete prompt sessions through the public API, with
//! answers fed from an in-memory buffer.

use std::io::{Cursor, Write};

use tempfile::NamedTempFile;
use termpick_core::{
    console::Console,
    error::Error,
    input::BufLineSource,
    menu_file::get_menu_definition,
    platform::Platform,
    printer::{Paint, PrintOptions, Printer},
    prompt::{Menu, Outcome, PickOptions, Selection},
    style::StyleSet,
};

type MemoryConsole = Console<Vec<u8>, BufLineSource<Cursor<String>>>;

fn memory_console(platform: Platform, answers: &str) -> MemoryConsole {
    Console::new(
        Printer::for_platform(Vec::new(), platform, vec![]),
        BufLineSource::new(Cursor::new(answers.to_string())),
    )
}

fn rendered(console: MemoryConsole) -> String {
    String::from_utf8(console.into_printer().into_inner()).unwrap()
}

fn letters() -> Menu {
    Menu::new("Pick a letter", ["A", "B", "C"]).unwrap()
}

#[test]
fn test_pick_letter_scenarios() {
    let cases = [
        (PickOptions::default(), Selection::Label("B".to_string())),
        (
            PickOptions {
                lowercase: true,
                ..PickOptions::default()
            },
            Selection::Label("b".to_string()),
        ),
        (
            PickOptions {
                index: true,
                ..PickOptions::default()
            },
            Selection::Indexed(1, "B".to_string()),
        ),
    ];

    for (options, expected) in cases {
        let mut console = memory_console(Platform::Unix, "2\n");
        let outcome = console.pick(&letters(), &options).unwrap();
        assert_eq!(outcome, Outcome::Answered(expected));
    }
}

#[test]
fn test_out_of_range_renders_again() {
    let mut console = memory_console(Platform::Unix, "9\n1\n");
    let outcome = console.pick(&letters(), &PickOptions::default()).unwrap();
    assert_eq!(outcome, Outcome::Answered(Selection::Label("A".to_string())));

    let output = rendered(console);
    assert_eq!(output.matches("Pick a letter\n").count(), 2);
    assert_eq!(output.matches("Option invalid!").count(), 1);
}

#[test]
fn test_every_out_of_range_answer_renders_again() {
    for answer in ["0", "4", "-3", "100"] {
        let mut console = memory_console(Platform::Unix, &format!("{answer}\n3\n"));
        let outcome = console.pick(&letters(), &PickOptions::default()).unwrap();
        assert_eq!(outcome, Outcome::Answered(Selection::Label("C".to_string())));
        assert_eq!(rendered(console).matches("Answer: ").count(), 2);
    }
}

#[test]
fn test_plain_output_has_no_escape_codes() {
    let mut console = memory_console(Platform::Unix, "1\n");
    let options = PickOptions {
        show_cancel_hint: true,
        ..PickOptions::default()
    };
    console.pick(&letters(), &options).unwrap();

    assert_eq!(
        rendered(console),
        "Pick a letter (Ctrl+C to Cancel)\n[1] A\n[2] B\n[3] C\nAnswer: "
    );
}

#[test]
fn test_colorless_platform_matches_plain_output() {
    let colorful = PickOptions {
        colorful: true,
        ..PickOptions::default()
    };

    let mut windows_console = memory_console(Platform::Windows, "7\n2\n");
    windows_console.pick(&letters(), &colorful).unwrap();

    let mut plain_console = memory_console(Platform::Unix, "7\n2\n");
    plain_console.pick(&letters(), &PickOptions::default()).unwrap();

    assert_eq!(rendered(windows_console), rendered(plain_console));
}

#[test]
fn test_validation_happens_before_rendering() {
    assert!(matches!(Menu::new("", ["A"]), Err(Error::EmptyTitle)));
    assert!(matches!(
        Menu::new("Pick", Vec::<&str>::new()),
        Err(Error::EmptyOptions)
    ));
    assert!(matches!(
        Menu::new("Pick", ["A", ""]),
        Err(Error::EmptyOption { position: 2 })
    ));
}

#[test]
fn test_end_of_input_is_an_error() {
    let mut console = memory_console(Platform::Unix, "x\n");
    let result = console.pick(&letters(), &PickOptions::default());
    assert!(matches!(result, Err(Error::InputClosed)));
}

#[test]
fn test_printer_with_windows_styles_is_plain() {
    let styles = StyleSet::new(Platform::Windows);
    let mut printer = Printer::for_platform(Vec::new(), Platform::Windows, vec![]);
    let options = PrintOptions::painted(Paint::new(&styles).foreground(styles.error()));
    let fragments = printer.print(&["Not", "found"], &options).unwrap();

    assert_eq!(fragments, ["Not", "found"]);
    assert_eq!(String::from_utf8(printer.into_inner()).unwrap(), "Not found\n");
}

#[test]
fn test_menu_file_workflow() {
    let yaml_content = r#"
title: "What is your favorite programming language?"
options: ["C", "C++", "Java", "Python", "Ruby"]
lowercase: true
index: true
"#;
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{yaml_content}").unwrap();

    let definition = get_menu_definition(temp_file.path().to_str().unwrap()).unwrap();
    let menu = definition.to_menu().unwrap();
    let options = definition.pick_options();

    let mut console = memory_console(Platform::Unix, "4\n");
    let outcome = console.pick(&menu, &options).unwrap();
    assert_eq!(
        outcome,
        Outcome::Answered(Selection::Indexed(3, "python".to_string()))
    );
}
