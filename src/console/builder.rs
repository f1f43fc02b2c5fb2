use super::registry::Command;
use super::state::Message;
use std::rc::Rc;

/// Builder for console commands defined as closures over the app state.
pub struct CommandBuilder<S> {
    name: String,
    aliases: Vec<String>,
    description: String,
    action: Box<dyn Fn(&[&str], &mut S) -> Result<Message, String>>,
}

impl<S> CommandBuilder<S> {
    pub fn new<F>(name: impl Into<String>, description: impl Into<String>, action: F) -> Self
    where
        F: Fn(&[&str], &mut S) -> Result<Message, String> + 'static,
    {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            description: description.into(),
            action: Box::new(action),
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn build(self) -> Rc<Box<dyn Command<S>>>
    where
        S: 'static,
    {
        Rc::new(Box::new(BuiltCommand {
            name: self.name,
            aliases: self.aliases,
            description: self.description,
            action: self.action,
        }))
    }
}

struct BuiltCommand<S> {
    name: String,
    aliases: Vec<String>,
    description: String,
    action: Box<dyn Fn(&[&str], &mut S) -> Result<Message, String>>,
}

impl<S> Command<S> for BuiltCommand<S> {
    fn name(&self) -> &str {
        &self.name
    }

    fn aliases(&self) -> Vec<&str> {
        self.aliases.iter().map(|s| s.as_str()).collect()
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn execute(&self, args: &[&str], state: &mut S) -> Result<Message, String> {
        (self.action)(args, state)
    }
}
