//! Control bindings between page elements and roster events.
//!
//! Each bindable handler is an [`ActionId`]: a control id, the trigger it
//! listens for, and the [`Event`] it produces. [`Controller::bind`] checks the
//! page for each control and binds the ones that exist; a missing control is
//! logged and skipped without affecting the others.
//!
//! # Example
//!
//! ```rust
//! use rosterview::app::controls::{ActionId, Controller, UiEvent};
//! use rosterview::ui::{HtmlPage, Theme};
//!
//! let page = HtmlPage::new(&Theme::default());
//! let controller = Controller::bind(&page);
//! assert_eq!(controller.bound().len(), ActionId::ALL.len());
//!
//! let event: UiEvent = "input:search-bar=bo".parse()?;
//! assert_eq!(event.value.as_deref(), Some("bo"));
//! # Ok::<(), rosterview::RosterError>(())
//! ```

use super::handler::Event;
use crate::domain::error::{Result, RosterError};
use crate::roster::Criterion;
use crate::ui::document::{
    Document, SEARCH_BAR, SEARCH_BUTTON, SORT_AZ, SORT_CLASS, SORT_GENDER, SORT_MARKS,
    SORT_PASSING, SORT_ZA,
};
use std::fmt;
use std::str::FromStr;

/// DOM event type a handler listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Button press.
    Click,
    /// Text input changed.
    Input,
}

impl Trigger {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Input => "input",
        }
    }
}

impl FromStr for Trigger {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "click" => Ok(Self::Click),
            "input" => Ok(Self::Input),
            other => Err(RosterError::Config(format!("unknown trigger: {other}"))),
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of one bindable control handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionId {
    SortAz,
    SortZa,
    SortMarks,
    SortClass,
    SortPassing,
    SortGender,
    /// Live search as the input changes.
    SearchInput,
    /// Search with the current input value on button press.
    SearchClick,
}

impl ActionId {
    /// All handlers, in binding order.
    pub const ALL: [Self; 8] = [
        Self::SortAz,
        Self::SortZa,
        Self::SortMarks,
        Self::SortClass,
        Self::SortPassing,
        Self::SortGender,
        Self::SearchInput,
        Self::SearchClick,
    ];

    /// Id of the element the handler is attached to.
    #[must_use]
    pub const fn control_id(self) -> &'static str {
        match self {
            Self::SortAz => SORT_AZ,
            Self::SortZa => SORT_ZA,
            Self::SortMarks => SORT_MARKS,
            Self::SortClass => SORT_CLASS,
            Self::SortPassing => SORT_PASSING,
            Self::SortGender => SORT_GENDER,
            Self::SearchInput => SEARCH_BAR,
            Self::SearchClick => SEARCH_BUTTON,
        }
    }

    #[must_use]
    pub const fn trigger(self) -> Trigger {
        match self {
            Self::SearchInput => Trigger::Input,
            _ => Trigger::Click,
        }
    }

    /// Criterion applied by a sort handler, `None` for the search handlers.
    #[must_use]
    pub fn criterion(self) -> Option<Criterion> {
        match self {
            Self::SortAz => Some(Criterion::NameAsc),
            Self::SortZa => Some(Criterion::NameDesc),
            Self::SortMarks => Some(Criterion::Marks),
            Self::SortClass => Some(Criterion::Class),
            Self::SortPassing => Some(Criterion::Passing),
            Self::SortGender => Some(Criterion::Gender),
            Self::SearchInput | Self::SearchClick => None,
        }
    }

    /// Builds the event for this handler from the current control state.
    ///
    /// Both search handlers read the search input's value.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::UnknownElement`] if a search handler runs on a
    /// page without the search input.
    pub fn event<D: Document + ?Sized>(self, document: &D) -> Result<Event> {
        match self.criterion() {
            Some(criterion) => Ok(Event::Sort(criterion)),
            None => Ok(Event::Search(document.value(SEARCH_BAR)?.to_string())),
        }
    }

    fn find(trigger: Trigger, control: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.trigger() == trigger && id.control_id() == control)
    }
}

/// A control event, written `<trigger>:<control>[=<value>]`.
///
/// For `input` events the value is what the control holds after the change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiEvent {
    pub trigger: Trigger,
    pub control: String,
    pub value: Option<String>,
}

impl FromStr for UiEvent {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        let (trigger, rest) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| RosterError::Config(format!("malformed event {s:?}: expected <trigger>:<control>")))?;

        let (control, value) = match rest.split_once('=') {
            Some((control, value)) => (control, Some(value.to_string())),
            None => (rest, None),
        };

        if control.is_empty() {
            return Err(RosterError::Config(format!("malformed event {s:?}: empty control id")));
        }

        Ok(Self {
            trigger: trigger.parse()?,
            control: control.to_string(),
            value,
        })
    }
}

impl fmt::Display for UiEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.trigger, self.control)?;
        if let Some(value) = &self.value {
            write!(f, "={value}")?;
        }
        Ok(())
    }
}

/// The set of handlers bound to a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Controller {
    bound: Vec<ActionId>,
}

impl Controller {
    /// Binds every handler whose control exists in `document`.
    ///
    /// Each missing control is logged as a [`RosterError::MissingControl`] at
    /// error level; the remaining handlers are still bound.
    #[must_use]
    pub fn bind<D: Document + ?Sized>(document: &D) -> Self {
        let _span = tracing::debug_span!("bind_controls").entered();

        let mut bound = Vec::with_capacity(ActionId::ALL.len());
        for id in ActionId::ALL {
            if document.has_element(id.control_id()) {
                bound.push(id);
            } else {
                let error = RosterError::MissingControl(id.control_id().to_string());
                tracing::error!(action = ?id, error = %error, "failed to bind control");
            }
        }

        tracing::debug!(bound_count = bound.len(), "controls bound");
        Self { bound }
    }

    /// Handlers bound so far, in binding order.
    #[must_use]
    pub fn bound(&self) -> &[ActionId] {
        &self.bound
    }

    /// Resolves a control event to the event of its bound handler.
    ///
    /// For `input` events carrying a value, the control's value is updated
    /// first, as typing would. Returns `Ok(None)` when no bound handler
    /// listens for the event.
    ///
    /// # Errors
    ///
    /// Propagates document errors from updating or reading controls.
    pub fn resolve<D: Document + ?Sized>(
        &self,
        document: &mut D,
        ui_event: &UiEvent,
    ) -> Result<Option<Event>> {
        if let (Trigger::Input, Some(value)) = (ui_event.trigger, &ui_event.value) {
            document.set_value(&ui_event.control, value)?;
        }

        let Some(id) = ActionId::find(ui_event.trigger, &ui_event.control)
            .filter(|id| self.bound.contains(id))
        else {
            tracing::debug!(event = %ui_event, "no handler bound for control event");
            return Ok(None);
        };

        id.event(document).map(Some)
    }
}
