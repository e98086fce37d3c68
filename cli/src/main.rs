//! winzoom CLI — a scripted driver for the zoom controller.
//!
//! Runs a sequence of steps against an in-memory simulated editor session
//! and prints what happens, e.g.:
//!
//! ```text
//! winzoom toggle close 2 toggle
//! winzoom --tab --windows 4 in status --json
//! ```

use std::process;

use winzoom_core::command::Command;
use winzoom_core::response::Response;
use winzoom_core::types::config::ZoomSettings;
use winzoom_core::types::handles::WindowId;
use winzoom_core::ZoomController;

mod sim;

use sim::SimHost;


/// One step of a scripted run: either a controller command or a
/// simulation event (the user closing a window).
#[derive(Debug, PartialEq)]
enum Step {
    Exec(Command),
    Close(u64),
}

#[derive(Debug)]
struct Script {
    settings: ZoomSettings,
    windows: u64,
    json: bool,
    steps: Vec<Step>,
}


fn main() {
    let args: Vec<String> = std::env::args().collect();
    let arg_refs: Vec<&str> = args[1..].iter().map(|s| s.as_str()).collect();

    let script = match parse_args(&arg_refs) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("winzoom: {}", e);
            process::exit(1);
        }
    };

    let mut host = SimHost::session(script.windows);
    let mut controller = ZoomController::setup(&mut host, script.settings);

    for step in script.steps {
        match step {
            Step::Close(n) => {
                host.close_window(WindowId(n));
                println!("closed w{}", n);
            }
            Step::Exec(cmd) => {
                let response = controller.execute(cmd, &mut host);
                print_response(&response, script.json);
            }
        }
    }

    print!("{}", host.render());
}


fn print_response(response: &Response, json: bool) {
    if json {
        match serde_json::to_string(response) {
            Ok(line) => println!("{}", line),
            Err(e) => eprintln!("winzoom: could not serialize response: {}", e),
        }
        return;
    }
    match response {
        Response::Ok { output } => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Response::Error { message } => {
            eprintln!("winzoom error: {}", message);
            process::exit(1);
        }
    }
}


fn parse_args(args: &[&str]) -> Result<Script, String> {
    let mut settings = ZoomSettings::default();
    let mut windows = 3;
    let mut json = false;
    let mut steps = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i] {
            "--tab" => settings.relocate_to_tab = true,
            "--bind" => {
                i += 1;
                let chord = args
                    .get(i)
                    .ok_or_else(|| "--bind requires a key chord".to_string())?;
                settings.keybinding = Some(chord.to_string());
            }
            "--windows" => {
                i += 1;
                windows = args
                    .get(i)
                    .and_then(|n| n.parse::<u64>().ok())
                    .ok_or_else(|| "--windows requires a number".to_string())?;
            }
            "--json" => json = true,
            "toggle" => steps.push(Step::Exec(Command::Toggle)),
            "in" => steps.push(Step::Exec(Command::ZoomIn)),
            "out" => steps.push(Step::Exec(Command::ZoomOut)),
            "status" => {
                let format = match args.get(i + 1) {
                    Some(&"--json") => {
                        i += 1;
                        Some("json".to_string())
                    }
                    _ => None,
                };
                steps.push(Step::Exec(Command::Status { format }));
            }
            "close" => {
                i += 1;
                let n = args
                    .get(i)
                    .and_then(|n| n.parse::<u64>().ok())
                    .ok_or_else(|| "Usage: close <window number>".to_string())?;
                steps.push(Step::Close(n));
            }
            "help" => {
                let topic = match args.get(i + 1) {
                    Some(t) if !t.starts_with("--") => {
                        i += 1;
                        Some(t.to_string())
                    }
                    _ => None,
                };
                steps.push(Step::Exec(Command::Help { topic }));
            }
            other => {
                return Err(format!(
                    "Unknown step: '{}'. Run 'winzoom help' for usage.",
                    other
                ));
            }
        }
        i += 1;
    }

    if steps.is_empty() {
        return Err("No steps specified. Run 'winzoom help' for usage.".into());
    }

    Ok(Script {
        settings,
        windows,
        json,
        steps,
    })
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_simple_toggle() {
        let script = parse_args(&["toggle"]).unwrap();
        assert_eq!(script.steps, vec![Step::Exec(Command::Toggle)]);
        assert_eq!(script.windows, 3);
        assert!(!script.settings.relocate_to_tab);
    }

    #[test]
    fn parses_flags_and_steps() {
        let script = parse_args(&["--tab", "--windows", "5", "in", "close", "2", "out"]).unwrap();
        assert!(script.settings.relocate_to_tab);
        assert_eq!(script.windows, 5);
        assert_eq!(
            script.steps,
            vec![
                Step::Exec(Command::ZoomIn),
                Step::Close(2),
                Step::Exec(Command::ZoomOut),
            ]
        );
    }

    #[test]
    fn status_json_becomes_a_format() {
        let script = parse_args(&["status", "--json"]).unwrap();
        assert_eq!(
            script.steps,
            vec![Step::Exec(Command::Status {
                format: Some("json".into())
            })]
        );
    }

    #[test]
    fn bind_flag_sets_the_keybinding() {
        let script = parse_args(&["--bind", "ctrl+w z", "toggle"]).unwrap();
        assert_eq!(script.settings.keybinding(), Some("ctrl+w z"));
    }

    #[test]
    fn empty_args_are_an_error() {
        assert!(parse_args(&[]).is_err());
    }

    #[test]
    fn unknown_step_is_an_error() {
        let err = parse_args(&["frob"]).unwrap_err();
        assert!(err.contains("Unknown step: 'frob'"));
    }

    #[test]
    fn close_requires_a_number() {
        assert!(parse_args(&["close"]).is_err());
        assert!(parse_args(&["close", "x"]).is_err());
    }
}
