use tracing::{debug, debug_span};

use imesync_core::editor::ImeAction;

use super::traits::{InputMethodSession, NativeTextOwner};
use super::types::{key, key_flags, ContextMenuAction, KeyAction, KeyEvent};
use super::AdapterInputConnection;

impl<M: InputMethodSession, N: NativeTextOwner> AdapterInputConnection<M, N> {
    /// Process a key event from the input method. Always reports the event
    /// as consumed.
    ///
    /// Deletions and printable characters are applied locally on release so
    /// the mirrored text stays in step; everything else goes to the text
    /// owner untouched.
    pub fn send_key_event(&mut self, event: &KeyEvent) -> bool {
        let _span = debug_span!("send_key_event", ?event).entered();

        match event.action {
            KeyAction::Up => match event.key_code {
                key::DEL => {
                    self.delete_surrounding_text(1, 0);
                    return true;
                }
                key::FORWARD_DEL => {
                    self.delete_surrounding_text(0, 1);
                    return true;
                }
                _ => {
                    if let Some(c) = event.unicode_char {
                        self.replace_selection_with_char(c);
                        if !self.config.forward_printable_release {
                            return true;
                        }
                    }
                }
            },
            KeyAction::Down => match event.key_code {
                // Enter finishes the composition and dispatches as one unit,
                // with a single selection update at the end.
                key::ENTER => {
                    self.begin_batch_edit();
                    self.finish_composing_text();
                    self.native.forward_key_event(event);
                    self.end_batch_edit();
                    return true;
                }
                // Handled on release.
                key::DEL | key::FORWARD_DEL => return true,
                _ => {}
            },
        }

        self.native.forward_key_event(event);
        true
    }

    fn replace_selection_with_char(&mut self, c: char) {
        let selection = self.text.selection_range();
        let mut buf = [0u8; 4];
        self.text
            .replace(selection.start, selection.end, c.encode_utf8(&mut buf));
        self.update_selection_if_required();
    }

    /// The input method's action key was pressed.
    ///
    /// "Next" moves focus to the following field: the current view is
    /// stale, so input restarts before a tab press is synthesized. Every
    /// other action becomes an enter press.
    pub fn perform_editor_action(&mut self, action: ImeAction) -> bool {
        let _span = debug_span!("perform_editor_action", ?action).entered();
        if action == ImeAction::Next {
            self.restart_input();
            if self.config.synthesize_tab_on_next {
                let tab = KeyEvent::down(key::TAB).with_flags(key_flags::SYNTHETIC);
                self.native.forward_key_event(&tab);
            }
        } else {
            let flags = key_flags::SOFT_KEYBOARD
                | key_flags::KEEP_TOUCH_MODE
                | key_flags::EDITOR_ACTION
                | key_flags::SYNTHETIC;
            self.native
                .forward_key_event(&KeyEvent::down(key::ENTER).with_flags(flags));
            self.native
                .forward_key_event(&KeyEvent::up(key::ENTER).with_flags(flags));
        }
        true
    }

    pub fn perform_context_menu_action(&mut self, action: ContextMenuAction) -> bool {
        debug!(?action, "perform_context_menu_action");
        match action {
            ContextMenuAction::SelectAll => self.native.select_all(),
            ContextMenuAction::Cut => self.native.cut(),
            ContextMenuAction::Copy => self.native.copy(),
            ContextMenuAction::Paste => self.native.paste(),
            ContextMenuAction::Other(_) => false,
        }
    }
}
