use std::rc::Rc;

use yew::Reducible;

use crate::{
    error::{ApiError, FormErrors},
    models::{Expense, ExpensePayload},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveTarget {
    Create,
    Update(i64),
}

impl SaveTarget {
    pub fn for_initial(initial: Option<&Expense>) -> Self {
        match initial {
            Some(expense) => SaveTarget::Update(expense.id),
            None => SaveTarget::Create,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SaveRequest {
    pub target: SaveTarget,
    pub payload: ExpensePayload,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalState {
    pub open: bool,
    pub saving: bool,
    /// The expense being edited; `None` while adding.
    pub editing: Option<Expense>,
    pub errors: FormErrors,
    /// Bumped on every open so the form remounts with a fresh draft.
    pub session: u32,
}

pub enum ModalAction {
    OpenForAdd,
    OpenForEdit(Expense),
    /// Ignored while a save is in flight.
    Close,
    /// The draft failed client-side checks; nothing was sent.
    Rejected(FormErrors),
    SaveStarted,
    SaveFinished(Result<(), ApiError>),
}

impl ModalState {
    pub fn target(&self) -> SaveTarget {
        SaveTarget::for_initial(self.editing.as_ref())
    }

    pub fn request(&self, payload: ExpensePayload) -> SaveRequest {
        SaveRequest {
            target: self.target(),
            payload,
        }
    }

    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit Expense"
        } else {
            "Add Expense"
        }
    }

    pub fn apply(&self, action: ModalAction) -> Self {
        match action {
            ModalAction::OpenForAdd | ModalAction::OpenForEdit(_) if self.saving => self.clone(),
            ModalAction::OpenForAdd => self.opened(None),
            ModalAction::OpenForEdit(expense) => self.opened(Some(expense)),
            ModalAction::Close if self.saving => self.clone(),
            ModalAction::Close => Self {
                session: self.session,
                ..Self::default()
            },
            ModalAction::Rejected(errors) => Self {
                errors,
                ..self.clone()
            },
            ModalAction::SaveStarted => Self {
                saving: true,
                errors: FormErrors::new(),
                ..self.clone()
            },
            ModalAction::SaveFinished(Ok(())) => Self {
                session: self.session,
                ..Self::default()
            },
            ModalAction::SaveFinished(Err(error)) => {
                log::warn!("saving expense failed: {error}");
                Self {
                    saving: false,
                    errors: FormErrors::from_error(&error),
                    ..self.clone()
                }
            }
        }
    }

    fn opened(&self, editing: Option<Expense>) -> Self {
        Self {
            open: true,
            saving: false,
            editing,
            errors: FormErrors::new(),
            session: self.session.wrapping_add(1),
        }
    }
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}
