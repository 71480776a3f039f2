use console::style;
use hrdesk::api::{CmdMessage, CmdResult, MessageLevel};

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", style(&message.content).dim()),
            MessageLevel::Success => println!("{}", style(&message.content).green()),
            MessageLevel::Warning => println!("{}", style(&message.content).yellow()),
            MessageLevel::Error => eprintln!("{}", style(&message.content).red()),
        }
    }
}

pub(super) fn print_result(result: &CmdResult) {
    if let Some(value) = &result.value {
        // Pretty printing a Value can't fail.
        println!(
            "{}",
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        );
    }
    for key in &result.keys {
        println!("{}", key);
    }
    if let Some(user) = &result.user {
        println!("{}", style(user.display_name()).bold());
    }
    print_messages(&result.messages);
}
