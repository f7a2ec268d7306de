mod basic;
mod dispatch;
mod proptest_fsm;
mod render;

use super::TranslatorSession;

pub(super) fn session() -> TranslatorSession {
    TranslatorSession::default()
}

pub(super) fn body(session: &mut TranslatorSession, stroke: &str) -> String {
    session.translate(stroke).unwrap().body
}
