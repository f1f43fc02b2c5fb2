use super::state::Message;
use std::{collections::HashMap, rc::Rc};

pub trait Command<S> {
    fn name(&self) -> &str;
    fn aliases(&self) -> Vec<&str> {
        vec![]
    }
    fn description(&self) -> &str;
    fn execute(&self, args: &[&str], state: &mut S) -> Result<Message, String>;
}

pub struct CommandRegistry<S> {
    commands: HashMap<String, Rc<Box<dyn Command<S>>>>,
}

impl<S> CommandRegistry<S> {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, command: Rc<Box<dyn Command<S>>>) {
        self.commands
            .insert(command.name().to_string(), Rc::clone(&command));
        for alias in command.aliases() {
            self.commands.insert(alias.to_string(), Rc::clone(&command));
        }
    }

    pub fn get(&self, name: &str) -> Option<&Rc<Box<dyn Command<S>>>> {
        self.commands.get(name)
    }

    /// Split a console line into a command name and arguments and run it.
    pub fn dispatch(&self, line: &str, state: &mut S) -> Result<Message, String> {
        let parts: Vec<&str> = line.trim().split_whitespace().collect();
        let Some((name, args)) = parts.split_first() else {
            return Err("No command provided".to_string());
        };
        match self.get(name) {
            Some(command) => command.execute(args, state),
            None => Err(format!("Unknown command: {}", name)),
        }
    }
}
