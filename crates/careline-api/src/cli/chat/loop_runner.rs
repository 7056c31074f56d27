//! Main chat loop orchestration.
//!
//! Greeting, banner, input loop with slash commands, and session end.

use std::io::Write;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rustyline_async::SharedWriter;
use tracing::debug;

use super::banner::print_welcome_banner;
use super::client::{ChatClient, ServerReply};
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};

fn thinking_spinner(message: &'static str) -> anyhow::Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    Ok(spinner)
}

/// Render one server reply.
fn print_reply(out: &mut impl Write, reply: &ServerReply, json: bool) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&reply.raw)?)?;
    } else {
        writeln!(
            out,
            "\n  {} {}\n",
            style("Bot:").cyan().bold(),
            reply.response.reply
        )?;
    }
    Ok(())
}

/// Run the interactive chat loop against the server at `base_url`.
pub async fn run_chat_loop(base_url: &str, json: bool) -> anyhow::Result<()> {
    let client = ChatClient::new(base_url);

    let spinner = thinking_spinner("connecting...")?;
    let greeting = client.start().await;
    spinner.finish_and_clear();
    let greeting = greeting?;

    let mut session_id = greeting.response.session_id.clone();
    debug!(session_id = %session_id, "Session opened");

    if !json {
        print_welcome_banner(client.base_url(), &session_id);
    }
    print_reply(&mut std::io::stdout(), &greeting, json)?;

    let prompt = format!("{} ", style("You:").green().bold());
    let (mut input, mut stdout) = ChatInput::new(prompt)?;

    loop {
        let text = match input.read_line().await {
            InputEvent::Message(text) => text,
            InputEvent::Interrupted => {
                print_interrupt_hint(&mut stdout)?;
                continue;
            }
            InputEvent::Eof => break,
        };

        if text.is_empty() {
            continue;
        }
        if commands::is_exit_word(&text) {
            break;
        }

        if let Some(cmd) = commands::parse(&text) {
            match cmd {
                ChatCommand::Help => commands::print_help(),
                ChatCommand::Clear => input.clear(),
                ChatCommand::Exit => break,
                ChatCommand::Unknown(name) => {
                    writeln!(
                        stdout,
                        "\n  {} Unknown command: {}. Type /help for available commands.\n",
                        style("?").yellow().bold(),
                        style(name).dim()
                    )?;
                }
            }
            continue;
        }

        let spinner = thinking_spinner("thinking...")?;
        let result = client.send(&text, &session_id).await;
        spinner.finish_and_clear();

        match result {
            Ok(reply) => {
                session_id = reply.response.session_id.clone();
                print_reply(&mut stdout, &reply, json)?;
                if reply.response.is_session_end() {
                    break;
                }
            }
            Err(e) => print_error(&mut stdout, &e)?,
        }
    }

    input.flush();
    if !json {
        println!("\n  {}\n", style("Take care. Goodbye!").dim());
    }
    Ok(())
}

fn print_interrupt_hint(out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(
        out,
        "\n  {}",
        style("Press Ctrl+D or type exit to leave, or keep chatting.").dim()
    )?;
    Ok(())
}

fn print_error(out: &mut SharedWriter, err: &anyhow::Error) -> anyhow::Result<()> {
    writeln!(
        out,
        "\n  {} {}\n",
        style("!").red().bold(),
        style(format!("{err:#}")).red()
    )?;
    Ok(())
}
