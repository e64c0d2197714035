//! Static help text (`help <topic>`).

use super::dispatch::{SubCommandFn, SubCommandHandler};

/// Answers `help` requests. Holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Helper;

const HELP_COMMANDS: &[(&str, SubCommandFn<Helper>)] = &[
    ("queue", Helper::on_queue),
    ("q", Helper::on_queue),
    ("hum", Helper::on_hum),
    ("about", Helper::on_about),
];

fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(|line| line.to_string()).collect()
}

impl Helper {
    fn on_queue(&mut self, _rest: &str, _sender: &str) -> Vec<String> {
        lines(&[
            "Use 'q+' to add yourself to the queue. To add someone else, use 'q+ _nick_'.",
            "Use 'q-' to remove yourself. 'q- later' moves you to the end of the queue.",
            "Use 'ack' to acknowledge the first queued person when they speak. Use 'ack _nick_' to acknowledge someone else.",
            "Use 'q?' to see the current contents of the queue.",
        ])
    }

    fn on_hum(&mut self, _rest: &str, _sender: &str) -> Vec<String> {
        lines(&[
            "To hum: set a topic with 'hum topic _topic_', then add options with 'hum option _description_'.",
            "Start the hum with 'hum start', and conclude with 'hum stop'.",
        ])
    }

    fn on_about(&mut self, _rest: &str, _sender: &str) -> Vec<String> {
        lines(&[
            "Hi, I'm meetingbot. You can learn more about me at <https://github.com/mnot/meetingbot>.",
        ])
    }
}

impl SubCommandHandler for Helper {
    fn sub_commands() -> &'static [(&'static str, SubCommandFn<Self>)] {
        HELP_COMMANDS
    }

    fn fallback(&mut self, _command: &str, _rest: &str, _sender: &str) -> Vec<String> {
        lines(&[
            "To get help, type 'help _command_'. I can give help about 'queue' and 'hum', and 'about' currently.",
        ])
    }
}
