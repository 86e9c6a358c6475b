//! Removal of frames injected by the instrumentation agent.
//!
//! The agent wraps instrumented methods through a bytecode interceptor.
//! A captured trace then shows the interceptor method plus a run of
//! generated frames (`$original`/`$auxiliary` delegates) between the
//! caller and the user method. This module strips those frames and moves
//! the real line number back onto the caller frame.

use super::frame::FrameElement;
use crate::utils::config::{AGENT_INTERCEPTOR_METHOD, AGENT_PATH_FRAGMENTS};
use log::debug;

/// Remove agent frames from an innermost-first frame list
///
/// **Public** - used by `StackTrace::frames` and directly by callers
/// holding a bare frame list
///
/// Walks the frames outermost-first. When the interceptor marker is
/// met, the most recently emitted frame takes the `source` of the first
/// later frame with a real line number, and everything from the marker
/// up to that frame is skipped. A marker with no emitted predecessor or
/// no later line-numbered frame is dropped on its own.
///
/// Finally, frames whose source lives in a known agent library are
/// dropped. The result is innermost-first again.
pub fn filter_agent_frames(elements: &[FrameElement]) -> Vec<FrameElement> {
    let outermost_first: Vec<&FrameElement> = elements.iter().rev().collect();
    let mut kept: Vec<FrameElement> = Vec::with_capacity(outermost_first.len());
    let mut skip_to = 0;

    for (index, frame) in outermost_first.iter().enumerate() {
        if index < skip_to {
            continue;
        }
        if frame.method != AGENT_INTERCEPTOR_METHOD {
            kept.push((*frame).clone());
            continue;
        }

        let fix_source = outermost_first
            .iter()
            .enumerate()
            .skip(index + 1)
            .find(|(_, candidate)| candidate.source_line_number().is_some());

        match (kept.last_mut(), fix_source) {
            (Some(needs_fix), Some((fix_index, fix_frame))) => {
                needs_fix.source = fix_frame.source.clone();
                skip_to = fix_index + 1;
            }
            (None, _) => {
                debug!("Interceptor frame at {} has no caller frame, dropping it", index)
            }
            (_, None) => debug!(
                "Interceptor frame at {} has no line-numbered callee, dropping it",
                index
            ),
        }
    }

    kept.reverse();
    kept.retain(|frame| !is_agent_library_frame(frame));
    kept
}

/// Whether a frame's source lies in an agent library
///
/// **Public** - useful for callers rendering their own frame lists
pub fn is_agent_library_frame(frame: &FrameElement) -> bool {
    AGENT_PATH_FRAGMENTS
        .iter()
        .any(|fragment| frame.source.contains(fragment))
}
