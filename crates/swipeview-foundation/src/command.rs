//! Executable actions bound to swipe items.
//!
//! A command is an injected capability: the swipe view only asks whether it
//! can run for a given parameter and then runs it. What the command does is
//! entirely up to the host.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Opaque parameter handed to a command on execution.
pub type CommandParameter = Rc<dyn Any>;

pub trait Command {
    fn can_execute(&self, parameter: Option<&dyn Any>) -> bool;

    fn execute(&self, parameter: Option<&dyn Any>);
}

type ExecuteFn = Box<dyn Fn(Option<&dyn Any>)>;
type CanExecuteFn = Box<dyn Fn(Option<&dyn Any>) -> bool>;

/// Command built from closures.
///
/// Without a `can_execute` predicate the command is always executable.
pub struct RelayCommand {
    execute: ExecuteFn,
    can_execute: Option<CanExecuteFn>,
}

impl RelayCommand {
    pub fn new<F>(execute: F) -> Self
    where
        F: Fn(Option<&dyn Any>) + 'static,
    {
        Self {
            execute: Box::new(execute),
            can_execute: None,
        }
    }

    pub fn with_can_execute<P>(mut self, can_execute: P) -> Self
    where
        P: Fn(Option<&dyn Any>) -> bool + 'static,
    {
        self.can_execute = Some(Box::new(can_execute));
        self
    }
}

impl Command for RelayCommand {
    fn can_execute(&self, parameter: Option<&dyn Any>) -> bool {
        self.can_execute
            .as_ref()
            .map_or(true, |predicate| predicate(parameter))
    }

    fn execute(&self, parameter: Option<&dyn Any>) {
        (self.execute)(parameter)
    }
}

impl fmt::Debug for RelayCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayCommand")
            .field("has_can_execute", &self.can_execute.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn relay_command_is_executable_without_predicate() {
        let runs = Rc::new(Cell::new(0));
        let counter = runs.clone();
        let command = RelayCommand::new(move |_| counter.set(counter.get() + 1));

        assert!(command.can_execute(None));
        command.execute(None);
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn predicate_sees_the_parameter() {
        let command = RelayCommand::new(|_| {}).with_can_execute(|parameter| {
            parameter
                .and_then(|p| p.downcast_ref::<i32>())
                .is_some_and(|value| *value > 0)
        });

        assert!(command.can_execute(Some(&5_i32)));
        assert!(!command.can_execute(Some(&-1_i32)));
        assert!(!command.can_execute(None));
    }
}
