//! Command Pattern
//!
//! Each button press is an object. The remote only knows `Command`; the
//! commands share the TV through `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use tracing::debug;

#[derive(Debug, Default)]
pub struct Tv {
    volume: i32,
}

impl Tv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turn_on(&self) -> String {
        "TV is ON".to_string()
    }

    pub fn turn_off(&self) -> String {
        "TV is OFF".to_string()
    }

    pub fn volume_up(&mut self) -> String {
        self.volume = self.volume.wrapping_add(1);
        format!("Volume is increased to : {}", self.volume)
    }

    pub fn volume_down(&mut self) -> String {
        self.volume = self.volume.wrapping_sub(1);
        format!("Volume is decreased to : {}", self.volume)
    }

    pub fn volume(&self) -> i32 {
        self.volume
    }
}

pub trait Command {
    fn execute(&self) -> String;
}

pub struct TurnOnCommand {
    tv: Rc<RefCell<Tv>>,
}

impl TurnOnCommand {
    pub fn new(tv: Rc<RefCell<Tv>>) -> Self {
        Self { tv }
    }
}

impl Command for TurnOnCommand {
    fn execute(&self) -> String {
        self.tv.borrow().turn_on()
    }
}

pub struct TurnOffCommand {
    tv: Rc<RefCell<Tv>>,
}

impl TurnOffCommand {
    pub fn new(tv: Rc<RefCell<Tv>>) -> Self {
        Self { tv }
    }
}

impl Command for TurnOffCommand {
    fn execute(&self) -> String {
        self.tv.borrow().turn_off()
    }
}

pub struct VolumeUpCommand {
    tv: Rc<RefCell<Tv>>,
}

impl VolumeUpCommand {
    pub fn new(tv: Rc<RefCell<Tv>>) -> Self {
        Self { tv }
    }
}

impl Command for VolumeUpCommand {
    fn execute(&self) -> String {
        self.tv.borrow_mut().volume_up()
    }
}

pub struct VolumeDownCommand {
    tv: Rc<RefCell<Tv>>,
}

impl VolumeDownCommand {
    pub fn new(tv: Rc<RefCell<Tv>>) -> Self {
        Self { tv }
    }
}

impl Command for VolumeDownCommand {
    fn execute(&self) -> String {
        self.tv.borrow_mut().volume_down()
    }
}

/// The invoker: holds one command at a time.
#[derive(Default)]
pub struct RemoteControl {
    command: Option<Rc<dyn Command>>,
}

impl RemoteControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_command(&mut self, command: Rc<dyn Command>) {
        self.command = Some(command);
    }

    /// `None` when no command has been assigned yet.
    pub fn press_button(&self) -> Option<String> {
        match &self.command {
            Some(command) => Some(command.execute()),
            None => {
                debug!("button pressed with no command assigned");
                None
            }
        }
    }
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let tv = Rc::new(RefCell::new(Tv::new()));
    let turn_on: Rc<dyn Command> = Rc::new(TurnOnCommand::new(Rc::clone(&tv)));
    let turn_off: Rc<dyn Command> = Rc::new(TurnOffCommand::new(Rc::clone(&tv)));
    let volume_up: Rc<dyn Command> = Rc::new(VolumeUpCommand::new(Rc::clone(&tv)));
    let volume_down: Rc<dyn Command> = Rc::new(VolumeDownCommand::new(Rc::clone(&tv)));

    let mut remote = RemoteControl::new();
    for command in [turn_on, volume_up, volume_down, turn_off] {
        remote.set_command(command);
        if let Some(line) = remote.press_button() {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}
