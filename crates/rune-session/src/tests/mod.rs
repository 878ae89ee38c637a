
use super::{EditorState, Event, KeyEvent};

pub(super) fn type_string(state: EditorState, s: &str) -> EditorState {
    s.chars()
        .fold(state, |st, c| st.apply(Event::Key(KeyEvent::Text(c.to_string()))))
}
