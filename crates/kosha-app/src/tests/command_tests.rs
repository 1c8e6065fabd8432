use kosha_types::{AppEvent, Mode, Screen};

use crate::io::{Command, InputContext, parse_line};

fn ctx(mode: Mode) -> InputContext {
    InputContext {
        mode,
        search_lang: "en".to_string(),
        source_lang: "en".to_string(),
        target_lang: "hi".to_string(),
    }
}

#[test]
fn bare_word_searches_in_dictionary_mode() {
    let cmd = parse_line("apple", &ctx(Mode::Dictionary)).unwrap();
    match cmd {
        Command::Event(AppEvent::Search { word, language }) => {
            assert_eq!(word, "apple");
            assert_eq!(language, "en");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn bare_word_translates_in_translate_mode() {
    let cmd = parse_line("apple", &ctx(Mode::Translate)).unwrap();
    match cmd {
        Command::Event(AppEvent::Translate { word, from, to }) => {
            assert_eq!(word, "apple");
            assert_eq!(from, "en");
            assert_eq!(to, "hi");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn question_mark_requests_suggestions() {
    let cmd = parse_line("?ap", &ctx(Mode::Dictionary)).unwrap();
    match cmd {
        Command::Event(AppEvent::Suggest { prefix, language }) => {
            assert_eq!(prefix, "ap");
            assert_eq!(language, "en");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn login_and_signup_take_positional_args() {
    let cmd = parse_line("/login a@b.c hunter2", &ctx(Mode::Dictionary)).unwrap();
    assert!(matches!(
        cmd,
        Command::Event(AppEvent::Login { email, password })
            if email == "a@b.c" && password == "hunter2"
    ));

    let cmd = parse_line("/signup tanmay a@b.c hunter2", &ctx(Mode::Dictionary)).unwrap();
    assert!(matches!(
        cmd,
        Command::Event(AppEvent::Signup { name, email, password })
            if name == "tanmay" && email == "a@b.c" && password == "hunter2"
    ));
}

#[test]
fn mode_and_screen_switches_parse() {
    assert!(matches!(
        parse_line("/mode translate", &ctx(Mode::Dictionary)),
        Some(Command::Event(AppEvent::SwitchMode(Mode::Translate)))
    ));
    assert!(matches!(
        parse_line("/mode dictionary", &ctx(Mode::Translate)),
        Some(Command::Event(AppEvent::SwitchMode(Mode::Dictionary)))
    ));
    assert!(matches!(
        parse_line("/screen signup", &ctx(Mode::Dictionary)),
        Some(Command::Event(AppEvent::SwitchScreen(Screen::Signup)))
    ));
}

#[test]
fn language_selection_stays_local() {
    assert_eq!(
        parse_line("/lang hi", &ctx(Mode::Dictionary)),
        Some(Command::SetSearchLanguage("hi".to_string()))
    );
    assert_eq!(
        parse_line("/source fr", &ctx(Mode::Translate)),
        Some(Command::SetSourceLanguage("fr".to_string()))
    );
    assert_eq!(
        parse_line("/target fr", &ctx(Mode::Translate)),
        Some(Command::SetTargetLanguage("fr".to_string()))
    );
}

#[test]
fn config_save_parses() {
    let cmd = parse_line(
        "/config https://example.supabase.co anon-key",
        &ctx(Mode::Dictionary),
    )
    .unwrap();
    assert!(matches!(
        cmd,
        Command::Event(AppEvent::SaveConfig { url, key })
            if url == "https://example.supabase.co" && key == "anon-key"
    ));
}

#[test]
fn empty_and_unknown_lines_do_nothing() {
    assert!(parse_line("", &ctx(Mode::Dictionary)).is_none());
    assert!(parse_line("   ", &ctx(Mode::Dictionary)).is_none());
    assert!(parse_line("/bogus", &ctx(Mode::Dictionary)).is_none());
    assert!(parse_line("/login onlyemail", &ctx(Mode::Dictionary)).is_none());
}

#[test]
fn shell_help_advertises_only_commands_the_grammar_accepts() {
    for cmd in kosha_ui::SHELL_COMMANDS.split_whitespace() {
        let line = match cmd {
            "/mode" => "/mode translate".to_string(),
            "/lang" | "/source" | "/target" => format!("{cmd} en"),
            "/screen" => "/screen signup".to_string(),
            "/config" => "/config https://example.supabase.co anon-key".to_string(),
            bare => bare.to_string(),
        };
        assert!(
            parse_line(&line, &ctx(Mode::Dictionary)).is_some(),
            "help line advertises {cmd} but the grammar rejects it"
        );
    }

    for cmd in ["/source", "/screen", "/config"] {
        assert!(
            kosha_ui::SHELL_COMMANDS.contains(cmd),
            "help line is missing {cmd}"
        );
    }
}

#[test]
fn swap_theme_logout_quit_parse() {
    assert!(matches!(
        parse_line("/swap", &ctx(Mode::Translate)),
        Some(Command::Event(AppEvent::SwapLanguages))
    ));
    assert!(matches!(
        parse_line("/theme", &ctx(Mode::Dictionary)),
        Some(Command::Event(AppEvent::ToggleTheme))
    ));
    assert!(matches!(
        parse_line("/logout", &ctx(Mode::Dictionary)),
        Some(Command::Event(AppEvent::Logout))
    ));
    assert!(matches!(
        parse_line("/quit", &ctx(Mode::Dictionary)),
        Some(Command::Event(AppEvent::Close))
    ));
}
