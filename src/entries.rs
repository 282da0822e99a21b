use crate::quantity::Quantity;

/// Which prompt loop an entry came from.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Category {
    Travel,
    Energy,
}

impl Category {
    pub fn heading(self) -> &'static str {
        match self {
            Category::Travel => "Enter your travel data:",
            Category::Energy => "Enter your energy consumption data:",
        }
    }

    pub fn activity_prompt(self) -> &'static str {
        match self {
            Category::Travel => "Enter travel mode (or type 'done' to finish): ",
            Category::Energy => "Enter energy type (or type 'done' to finish): ",
        }
    }

    pub fn quantity_prompt(self, activity: &str) -> String {
        match self {
            Category::Travel => format!("Enter distance traveled by {activity} (in miles): "),
            Category::Energy => format!("Enter consumption for {activity} (in kWh or therms): "),
        }
    }

    pub fn retry_message(self) -> &'static str {
        match self {
            Category::Travel => "Please enter a valid number for distance.",
            Category::Energy => "Please enter a valid number for consumption.",
        }
    }
}

/// Canonical form of a user-typed activity name.
pub fn normalize_activity(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Activity -> quantity mapping that remembers first-insertion order.
///
/// Inserting an existing activity replaces its quantity but keeps its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entries {
    items: Vec<(String, Quantity)>,
}

impl Entries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the previous quantity if the activity was already present.
    pub fn insert(&mut self, activity: impl Into<String>, quantity: Quantity) -> Option<Quantity> {
        let activity = activity.into();
        match self.items.iter_mut().find(|(a, _)| *a == activity) {
            Some((_, slot)) => Some(std::mem::replace(slot, quantity)),
            None => {
                self.items.push((activity, quantity));
                None
            }
        }
    }

    pub fn get(&self, activity: &str) -> Option<Quantity> {
        self.items
            .iter()
            .find(|(a, _)| a == activity)
            .map(|(_, q)| *q)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Quantity)> {
        self.items.iter().map(|(a, q)| (a.as_str(), *q))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Quantity)> for Entries {
    fn from_iter<I: IntoIterator<Item = (S, Quantity)>>(iter: I) -> Self {
        let mut entries = Entries::new();
        for (activity, quantity) in iter {
            entries.insert(activity, quantity);
        }
        entries
    }
}
