//! Pointer gesture state for dragging a field from the palette onto a zone.
//!
//! The UI feeds pointer input in once per frame: `begin` when a palette
//! entry starts being dragged, `hover` with whichever zone is under the
//! pointer, and `release` when the button goes up.

use crate::field::{Field, Section};
use crate::form_state::accepts;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        payload: Field,
    },
    OverTarget {
        payload: Field,
        zone: Section,
        valid: bool,
    },
}

/// A completed gesture: `payload` was released over a zone that accepts it.
#[derive(Debug, Clone, PartialEq)]
pub struct DropRequest {
    pub zone: Section,
    pub payload: Field,
}

/// How a zone should be painted for the current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneHighlight {
    Neutral,
    Accepting,
    Rejecting,
}

#[derive(Debug, Default)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.state, DragState::Idle)
    }

    pub fn payload(&self) -> Option<&Field> {
        payload_of(&self.state)
    }

    pub fn is_dragging_field(&self, name: &str) -> bool {
        self.payload().map_or(false, |f| f.name == name)
    }

    pub fn begin(&mut self, payload: Field) {
        if self.is_active() {
            return;
        }
        tracing::debug!(field = %payload.name, "drag started");
        self.state = DragState::Dragging { payload };
    }

    /// Move the gesture onto `zone`, or off every zone when `None`.
    pub fn hover(&mut self, zone: Option<Section>) {
        let state = std::mem::take(&mut self.state);
        self.state = match (state, zone) {
            (DragState::Idle, _) => DragState::Idle,
            (DragState::Dragging { payload } | DragState::OverTarget { payload, .. }, Some(zone)) => {
                let valid = accepts(zone, &payload);
                DragState::OverTarget {
                    payload,
                    zone,
                    valid,
                }
            }
            (DragState::Dragging { payload } | DragState::OverTarget { payload, .. }, None) => {
                DragState::Dragging { payload }
            }
        };
    }

    /// End the gesture. Only a release over an accepting zone yields a drop.
    pub fn release(&mut self) -> Option<DropRequest> {
        match std::mem::take(&mut self.state) {
            DragState::OverTarget {
                payload,
                zone,
                valid: true,
            } => Some(DropRequest { zone, payload }),
            DragState::Idle => None,
            other => {
                if let Some(payload) = payload_of(&other) {
                    tracing::debug!(field = %payload.name, "drag released without a valid target");
                }
                None
            }
        }
    }

    pub fn cancel(&mut self) {
        if self.is_active() {
            tracing::debug!("drag cancelled");
        }
        self.state = DragState::Idle;
    }

    pub fn highlight(&self, zone: Section) -> ZoneHighlight {
        match &self.state {
            DragState::OverTarget {
                zone: hovered,
                valid,
                ..
            } if *hovered == zone => {
                if *valid {
                    ZoneHighlight::Accepting
                } else {
                    ZoneHighlight::Rejecting
                }
            }
            _ => ZoneHighlight::Neutral,
        }
    }
}

fn payload_of(state: &DragState) -> Option<&Field> {
    match state {
        DragState::Idle => None,
        DragState::Dragging { payload } | DragState::OverTarget { payload, .. } => Some(payload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fiscal_period() -> Field {
        Field::new("fiscal_period", "Fiscal Period", Section::Transaction)
    }

    #[test]
    fn test_starts_idle() {
        let session = DragSession::new();
        assert_eq!(session.state(), &DragState::Idle);
        assert!(!session.is_active());
        assert_eq!(session.highlight(Section::Transaction), ZoneHighlight::Neutral);
    }

    #[test]
    fn test_release_over_matching_zone_yields_drop() {
        let mut session = DragSession::new();
        session.begin(fiscal_period());
        session.hover(Some(Section::Transaction));

        assert_eq!(session.highlight(Section::Transaction), ZoneHighlight::Accepting);
        assert_eq!(session.highlight(Section::Seller), ZoneHighlight::Neutral);

        let drop = session.release();
        assert_eq!(
            drop,
            Some(DropRequest {
                zone: Section::Transaction,
                payload: fiscal_period(),
            })
        );
        assert!(!session.is_active());
    }

    #[test]
    fn test_release_over_wrong_zone_is_noop() {
        let mut session = DragSession::new();
        session.begin(fiscal_period());
        session.hover(Some(Section::Seller));

        assert_eq!(session.highlight(Section::Seller), ZoneHighlight::Rejecting);
        assert_eq!(session.release(), None);
        assert_eq!(session.state(), &DragState::Idle);
    }

    #[test]
    fn test_release_outside_any_zone_is_noop() {
        let mut session = DragSession::new();
        session.begin(fiscal_period());
        session.hover(Some(Section::Transaction));
        session.hover(None);

        assert_eq!(
            session.state(),
            &DragState::Dragging {
                payload: fiscal_period()
            }
        );
        assert_eq!(session.release(), None);
    }

    #[test]
    fn test_hover_while_idle_stays_idle() {
        let mut session = DragSession::new();
        session.hover(Some(Section::Seller));
        assert_eq!(session.state(), &DragState::Idle);
        assert_eq!(session.release(), None);
    }

    #[test]
    fn test_begin_ignored_while_dragging() {
        let mut session = DragSession::new();
        session.begin(fiscal_period());
        session.begin(Field::new("sap_vendor_id", "SAP Vendor ID", Section::Seller));

        assert!(session.is_dragging_field("fiscal_period"));
        assert!(!session.is_dragging_field("sap_vendor_id"));
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut session = DragSession::new();
        session.begin(fiscal_period());
        session.hover(Some(Section::Transaction));
        session.cancel();

        assert_eq!(session.state(), &DragState::Idle);
        assert_eq!(session.payload(), None);
        assert_eq!(session.release(), None);
    }
}
