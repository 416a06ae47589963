//! Message processing through the TEA update loop

use tracing::trace;

use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::PageState;

/// Process one message, returning the action the runtime should perform
pub fn process_message(state: &mut PageState, message: Message) -> Option<UpdateAction> {
    trace!("Processing {:?}", message);
    handler::update(state, message).action
}
