//! Subcommand implementations. Each writes its output to `out` so the
//! binary and the tests share one code path.

use std::io::{BufRead, Write};
use std::time::Duration;

use log::{debug, info};
use mhc_core::cards::{GRID_HEADING, GRID_SUBHEADING, READ_MORE_LABEL, ResourceCard};
use mhc_core::catalog::Catalog;
use mhc_core::chat::{ChatMessage, ChatSession, EchoResponder, Sender};
use serde::Serialize;

use crate::Result;

fn print_json(out: &mut impl Write, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn list(catalog: &Catalog, out: &mut impl Write) -> Result<()> {
    print_json(out, &catalog.list_all())
}

pub fn category(catalog: &Catalog, name: &str, out: &mut impl Write) -> Result<()> {
    print_json(out, &catalog.list_by_category(name))
}

pub fn get(catalog: &Catalog, id: &str, out: &mut impl Write) -> Result<()> {
    let record = catalog.get_by_raw_id(id)?;
    print_json(out, &record)
}

pub fn cards(cards: &[ResourceCard], out: &mut impl Write) -> Result<()> {
    writeln!(out, "{GRID_HEADING}")?;
    writeln!(out, "{GRID_SUBHEADING}")?;
    for card in cards {
        writeln!(out)?;
        writeln!(out, "{}  [{}]", card.icon, card.category)?;
        writeln!(out, "    {}", card.title)?;
        writeln!(out, "    {}", card.description)?;
        writeln!(out, "    {READ_MORE_LABEL}")?;
    }
    Ok(())
}

fn render(message: &ChatMessage, out: &mut impl Write) -> Result<()> {
    let who = match message.sender {
        Sender::User => "you",
        Sender::Bot => "bot",
    };
    writeln!(out, "{who}: {}", message.text)?;
    out.flush()?;
    Ok(())
}

/// Read messages line by line, echoing each and the bot's delayed reply.
///
/// Blank lines are skipped and `/quit` ends the session early.
pub fn chat(delay: Duration, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let _guard = runtime.enter();

    let session = ChatSession::with_responder(EchoResponder, delay);
    info!("chat started, reply delay {delay:?}");

    for line in input.lines() {
        let line = line?;
        let text = line.trim_end();
        if text.is_empty() {
            continue;
        }
        if text == "/quit" {
            break;
        }

        let pending = session.send(text);
        render(&ChatMessage::user(text), out)?;
        runtime.block_on(pending)?;

        if let Some(reply) = session.messages().last() {
            render(reply, out)?;
        }
    }

    debug!("chat ended after {} messages", session.messages().len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mhc_core::cards::sample_cards;

    fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn list_prints_total() {
        let text = output(|out| list(&Catalog::default(), out));
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["total"], 6);
    }

    #[test]
    fn get_unknown_id_errors() {
        let mut buf = Vec::new();
        let err = get(&Catalog::default(), "7", &mut buf).unwrap_err();
        assert_eq!(err.to_string(), "Resource not found: 7");
        assert!(buf.is_empty());
    }

    #[test]
    fn cards_render_every_card() {
        let text = output(|out| cards(&sample_cards(), out));
        assert!(text.starts_with("Mental Health Resources\n"));
        assert_eq!(text.matches(READ_MORE_LABEL).count(), 6);
        assert!(text.contains("🧘  [Wellness]"));
    }

    #[test]
    fn chat_echoes_each_line() {
        let input = "hello\n\n  \nhow are you?\n/quit\nignored\n".as_bytes();
        let text = output(|out| chat(Duration::ZERO, input, out));
        assert_eq!(
            text,
            "you: hello\nbot: Bot response to: hello\nyou: how are you?\nbot: Bot response to: how are you?\n"
        );
    }
}
