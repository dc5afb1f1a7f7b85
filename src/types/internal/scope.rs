use crate::types::db::user;
use crate::types::internal::category::EventCategory;

/// The category restriction attached to an admin account. `Super` sees and
/// manages everything; `Category` is limited to events of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminScope {
    Super,
    Category(EventCategory),
}

impl AdminScope {
    /// Derive the scope from a user row. Callers must have checked
    /// `is_admin` already. A scope string outside the category set and not
    /// the "super" sentinel yields `None`: such an account is granted
    /// nothing rather than everything.
    pub fn of(user: &user::Model) -> Option<Self> {
        if user.is_super_admin() {
            return Some(AdminScope::Super);
        }
        EventCategory::parse(user.admin_scope.trim()).map(AdminScope::Category)
    }

    pub fn allows(&self, category: EventCategory) -> bool {
        match self {
            AdminScope::Super => true,
            AdminScope::Category(own) => *own == category,
        }
    }

    /// Scope check against a raw stored category label
    pub fn allows_label(&self, label: &str) -> bool {
        match self {
            AdminScope::Super => true,
            AdminScope::Category(own) => own.as_str() == label,
        }
    }

    /// The category labels this admin may assign to an event.
    pub fn category_options(&self) -> Vec<String> {
        match self {
            AdminScope::Super => EventCategory::labels(),
            AdminScope::Category(own) => vec![own.as_str().to_string()],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdminScope::Super => "super",
            AdminScope::Category(own) => own.as_str(),
        }
    }
}
