//! Conversation history with a bounded window
//!
//! The loop owns one [`ConversationHistory`]. The window is enforced whenever
//! a new user turn is appended: the oldest turns are evicted first, then any
//! leading turns that are not plain user input are dropped too, so a request
//! never opens with an assistant turn or a tool result whose originating call
//! was evicted. Tool exchanges inside a single user turn are never cut.

use crate::types::Message;
use std::collections::VecDeque;

/// Default number of turns kept in the history.
pub const MAX_HISTORY_LENGTH: usize = 20;

#[derive(Debug, Clone)]
pub struct ConversationHistory {
    max_len: usize,
    messages: VecDeque<Message>,
}

impl Default for ConversationHistory {
    fn default() -> Self {
        Self::new(MAX_HISTORY_LENGTH)
    }
}

impl ConversationHistory {
    /// A zero window is treated as one so the latest turn is always kept.
    pub fn new(max_len: usize) -> Self {
        Self {
            max_len: max_len.max(1),
            messages: VecDeque::new(),
        }
    }

    pub fn push(&mut self, message: Message) {
        let is_user_text = message.is_user_text();
        self.messages.push_back(message);
        if is_user_text {
            self.trim_if_needed();
        }
    }

    pub fn messages(&self) -> Vec<Message> {
        self.messages.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn trim_if_needed(&mut self) {
        while self.messages.len() > self.max_len {
            self.messages.pop_front();
        }

        // Terminates at the user turn that was just pushed
        while self.messages.len() > 1
            && !self.messages.front().is_some_and(Message::is_user_text)
        {
            self.messages.pop_front();
        }
    }
}
