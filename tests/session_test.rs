//! Interactive session integration tests
//! Run with: cargo test --test session_test

use std::io::Cursor;
use std::sync::Once;

use channel_dispatch::{
    ChannelError, ChannelFactory, ChannelKind, DispatchService, FileFormat, MessageKind, Outcome,
    Session,
};

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

fn run_session(input: &str) -> (Outcome, String) {
    ensure_init();

    let mut output = Vec::new();
    let outcome = Session::new(Cursor::new(input.to_string()), &mut output)
        .run()
        .expect("session should not fail on console input");
    (outcome, String::from_utf8(output).expect("output is utf-8"))
}

/// Channel 1, text message: WhatsApp notice, no video prompts
#[test]
fn test_whatsapp_text_scenario() {
    let (outcome, out) = run_session("1\nAlice\nHello\n1\n");

    assert!(outcome.is_sent());
    assert!(out.contains("WhatsApp"));
    assert!(out.contains("Alice"));
    assert!(out.contains("Hello"));
    assert!(out.contains("Sent at: "));
    assert!(!out.contains("Enter the file"));
    assert!(!out.contains("Enter the duration"));
}

/// Channel 2, video with all fields present
#[test]
fn test_telegram_video_scenario() {
    let (outcome, out) = run_session("2\nBob\nNew trailer\n2\nclip.mp4\nmp4\n10\n");

    match outcome {
        Outcome::Sent { channel, recipient, message } => {
            assert_eq!(channel, ChannelKind::Telegram);
            assert_eq!(recipient, "Bob");
            assert_eq!(message.content(), "New trailer");
            match message.kind() {
                MessageKind::Video { attachment, duration_minutes } => {
                    assert_eq!(attachment.file, "clip.mp4");
                    assert_eq!(attachment.format, FileFormat::Mp4);
                    assert_eq!(*duration_minutes, 10);
                }
                other => panic!("expected a video message, got {:?}", other),
            }
        }
        other => panic!("expected a send, got {:?}", other),
    }
    assert!(out.contains("Sending message via Telegram to Bob"));
    assert!(out.contains("Content: New trailer"));
}

/// Blank file: no message, no send, clean end
#[test]
fn test_blank_video_file_scenario() {
    let (outcome, out) = run_session("2\nBob\nNew trailer\n2\n\nmp4\n");

    assert_eq!(outcome, Outcome::VideoAborted);
    assert!(!out.contains("Sending message"));
}

/// Out-of-range channel: nothing constructed
#[test]
fn test_out_of_range_channel_scenario() {
    let (outcome, out) = run_session("9\nAlice\nHello\n1\n");

    assert_eq!(outcome, Outcome::InvalidChannel);
    assert!(out.contains("Invalid channel selection."));
    assert!(!out.contains("Enter the recipient"));
    assert!(!out.contains("Sending message"));
}

/// Prompts appear in the documented order
#[test]
fn test_prompt_order() {
    let (_, out) = run_session("3\nCarol\nHi\n2\nnotes.pdf\npdf\n5\n");

    let order = [
        "Choose the communication channel:",
        "Enter the recipient: ",
        "Enter the message: ",
        "Choose the message type:",
        "Enter the file: ",
        "Enter the format: ",
        "Enter the duration (in minutes): ",
        "Sending message via Facebook to Carol",
    ];
    let mut from = 0;
    for expected in order {
        let at = out[from..]
            .find(expected)
            .unwrap_or_else(|| panic!("missing {:?} after offset {}", expected, from));
        from += at + expected.len();
    }
}

/// Unknown formats always fall back to mp4; the timestamp pattern flows through
#[test]
fn test_configured_session() {
    ensure_init();

    let mut output = Vec::new();
    let outcome = Session::new(Cursor::new("4\nDan\nLook\n2\nphoto\nheic\nabc\n"), &mut output)
        .with_dispatcher(DispatchService::new(
            ChannelFactory::new().with_timestamp_format("%Y"),
        ))
        .run()
        .unwrap();
    let out = String::from_utf8(output).unwrap();

    match outcome {
        Outcome::Sent { message, .. } => {
            assert_eq!(message.attachment().map(|a| a.format), Some(FileFormat::Mp4));
            assert_eq!(message.duration_minutes(), Some(0));
        }
        other => panic!("expected a send, got {:?}", other),
    }
    assert!(out.contains("Format 'heic' not recognized. Using default format."));
    assert!(out.contains("Attachment: photo (mp4)"));
    let sent_at = out
        .lines()
        .find_map(|line| line.strip_prefix("Sent at: "))
        .expect("notice has a timestamp");
    assert_eq!(sent_at.len(), 4);
    assert!(sent_at.chars().all(|c| c.is_ascii_digit()));
}

/// The factory rejects names outside the supported set
#[test]
fn test_factory_rejects_unknown_channel() {
    let factory = ChannelFactory::new();
    for name in ["Signal", "WHATSAPP2", "tele gram"] {
        assert!(matches!(
            factory.create(name),
            Err(ChannelError::UnrecognizedChannel(ref n)) if n == name
        ));
    }
    assert!(factory.create("InStAgRaM").is_ok());
}

/// Non-UTF-8 bytes in free text do not end the run
#[test]
fn test_invalid_utf8_recipient_is_sent() {
    ensure_init();

    let mut output = Vec::new();
    let input: &[u8] = b"1\n\xff\xfe\nHello\n1\n";
    let outcome = Session::new(input, &mut output).run().unwrap();

    match outcome {
        Outcome::Sent { recipient, .. } => assert_eq!(recipient, "\u{FFFD}\u{FFFD}"),
        other => panic!("expected a send, got {:?}", other),
    }
}
