//! Help system for winzoom commands.

pub fn help_text(topic: Option<&str>) -> String {
    match topic {
        None => overview(),
        Some(t) => command_help(t).unwrap_or_else(|| {
            format!(
                "Unknown help topic: '{}'. Run 'winzoom help' for a list of commands.",
                t
            )
        }),
    }
}


fn overview() -> String {
    "\
winzoom — maximize the focused window, bring the rest back on demand

Commands:
  toggle               Zoom in if unzoomed, zoom out if zoomed
  in                   Zoom in (no-op when already zoomed)
  out                  Zoom out (no-op when already unzoomed)
  status [--json]      Report the current zoom state
  help [topic]         Show help

Zooming either hides every sibling window in place (default) or moves the
focused window into an isolated tab, depending on configuration. The saved
arrangement comes back exactly, minus any window closed in the meantime.

Run 'winzoom help <command>' for detailed help on a specific command."
        .into()
}


fn command_help(topic: &str) -> Option<String> {
    let text = match topic {
        "toggle" => "\
toggle
  Flip between zoomed and unzoomed. Bound to the configured key chord and
  registered as the 'zoom.toggle' command.",
        "in" => "\
in
  Maximize the focused window. The prior arrangement is saved so 'out' can
  reverse it. Calling 'in' while already zoomed does nothing.",
        "out" => "\
out
  Restore the saved arrangement: every window still open becomes visible
  again and focus returns to the previously focused window. Windows closed
  while zoomed are skipped. Calling 'out' while unzoomed does nothing.",
        "status" => "\
status [--json]
  Print 'zoomed' or 'unzoomed'. With --json, emit a JSON object with the
  zoom state and the active strategy.",
        _ => return None,
    };
    Some(text.into())
}
