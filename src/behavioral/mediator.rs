//! Mediator Pattern
//!
//! Users never talk to each other directly; the chat room relays every
//! message. The room owns the users (`Rc`), the users only point back at the
//! room (`Weak`), so there is no reference cycle to leak.

use std::cell::RefCell;
use std::io::{self, Write};
use std::ptr;
use std::rc::{Rc, Weak};

use tracing::warn;

pub trait ChatMediator {
    /// Delivers `message` to every registered user except `sender`.
    fn send_message(&self, message: &str, sender: &dyn User) -> Vec<String>;

    fn add_user(&self, user: Rc<dyn User>);
}

pub trait User {
    fn name(&self) -> &str;

    fn send(&self, message: &str) -> Vec<String>;

    fn receive(&self, message: &str) -> String;
}

#[derive(Default)]
pub struct ChatRoom {
    users: RefCell<Vec<Rc<dyn User>>>,
}

impl ChatRoom {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChatMediator for ChatRoom {
    fn send_message(&self, message: &str, sender: &dyn User) -> Vec<String> {
        self.users
            .borrow()
            .iter()
            .filter(|user| !ptr::addr_eq(Rc::as_ptr(*user), ptr::from_ref(sender)))
            .map(|user| user.receive(message))
            .collect()
    }

    fn add_user(&self, user: Rc<dyn User>) {
        self.users.borrow_mut().push(user);
    }
}

pub struct ChatUser {
    mediator: Weak<dyn ChatMediator>,
    name: String,
}

impl ChatUser {
    pub fn new(mediator: &Rc<dyn ChatMediator>, name: impl Into<String>) -> Self {
        Self {
            mediator: Rc::downgrade(mediator),
            name: name.into(),
        }
    }
}

impl User for ChatUser {
    fn name(&self) -> &str {
        &self.name
    }

    fn send(&self, message: &str) -> Vec<String> {
        let mut lines = vec![format!("{} send : {}", self.name, message)];
        match self.mediator.upgrade() {
            Some(mediator) => lines.extend(mediator.send_message(message, self)),
            None => warn!(user = %self.name, "chat room is gone, message dropped"),
        }
        lines
    }

    fn receive(&self, message: &str) -> String {
        format!("{} receives : {}", self.name, message)
    }
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let chat_room: Rc<dyn ChatMediator> = Rc::new(ChatRoom::new());

    let user1: Rc<dyn User> = Rc::new(ChatUser::new(&chat_room, "Prabhas"));
    let user2: Rc<dyn User> = Rc::new(ChatUser::new(&chat_room, "Mahesh"));
    let user3: Rc<dyn User> = Rc::new(ChatUser::new(&chat_room, "Allu Arjun"));

    chat_room.add_user(Rc::clone(&user1));
    chat_room.add_user(user2);
    chat_room.add_user(user3);

    for line in user1.send("Hello Everyone") {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_does_not_hear_itself() {
        let room: Rc<dyn ChatMediator> = Rc::new(ChatRoom::new());
        let alice: Rc<dyn User> = Rc::new(ChatUser::new(&room, "Alice"));
        room.add_user(Rc::clone(&alice));

        assert_eq!(alice.send("anyone?"), vec!["Alice send : anyone?"]);
    }

    #[test]
    fn test_same_name_is_still_a_different_user() {
        let room: Rc<dyn ChatMediator> = Rc::new(ChatRoom::new());
        let first: Rc<dyn User> = Rc::new(ChatUser::new(&room, "Sam"));
        let second: Rc<dyn User> = Rc::new(ChatUser::new(&room, "Sam"));
        room.add_user(Rc::clone(&first));
        room.add_user(second);

        let lines = first.send("hi");
        assert_eq!(lines, vec!["Sam send : hi", "Sam receives : hi"]);
    }

    #[test]
    fn test_unregistered_sender_reaches_everyone() {
        let room: Rc<dyn ChatMediator> = Rc::new(ChatRoom::new());
        let member: Rc<dyn User> = Rc::new(ChatUser::new(&room, "Member"));
        room.add_user(member);

        let outsider = ChatUser::new(&room, "Outsider");
        assert_eq!(outsider.send("knock")[1], "Member receives : knock");
    }

    #[test]
    fn test_send_after_room_dropped() {
        let room: Rc<dyn ChatMediator> = Rc::new(ChatRoom::new());
        let user = ChatUser::new(&room, "Last");
        drop(room);

        assert_eq!(user.send("echo"), vec!["Last send : echo"]);
    }

    #[test]
    fn test_transcript() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Prabhas send : Hello Everyone\n\
             Mahesh receives : Hello Everyone\n\
             Allu Arjun receives : Hello Everyone\n"
        );
    }
}
