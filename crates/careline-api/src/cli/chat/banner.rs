//! Welcome banner display for chat sessions.

use console::style;

/// Print the welcome banner with the server URL and session id.
pub fn print_welcome_banner(server_url: &str, session_id: &str) {
    println!();
    println!("  + {}", style("Careline triage assistant").cyan().bold());
    println!(
        "  {}",
        style("Symptom triage only. Not a diagnosis. In an emergency call your local emergency number.").dim()
    );
    println!();
    println!("  {}   {}", style("Server:").bold(), style(server_url).dim());
    println!(
        "  {}  {}",
        style("Session:").bold(),
        style(short_id(session_id)).dim()
    );
    println!();
    println!(
        "  {}",
        style("Type /help for commands, `exit` or Ctrl+D to quit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}

/// First eight characters of a session id.
fn short_id(session_id: &str) -> String {
    session_id.chars().take(8).collect()
}
