use super::Walker;
use crate::{Description, Enum, EnumId};

pub type EnumWalker<'a> = Walker<'a, EnumId>;

impl<'a> EnumWalker<'a> {
    pub fn get(self) -> &'a Enum {
        &self.service[self.id]
    }

    pub fn name(self) -> &'a str {
        &self.get().name
    }

    pub fn values(self) -> &'a [String] {
        &self.get().values
    }

    pub fn description(self) -> Option<&'a Description> {
        self.get().description.as_ref()
    }
}
