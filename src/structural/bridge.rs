//! Bridge Pattern
//!
//! Remotes (the abstraction) and devices (the implementation) vary
//! independently. Any remote drives any device through `dyn Device`.

use std::io::{self, Write};

// ============================================================================
// Implementation side
// ============================================================================

pub trait Device {
    fn turn_on(&self) -> String;
    fn turn_off(&self) -> String;
    fn set_volume(&self, percent: u8) -> String;
}

pub struct Tv;

impl Device for Tv {
    fn turn_on(&self) -> String {
        "TV is turned ON".to_string()
    }

    fn turn_off(&self) -> String {
        "TV is turned OFF".to_string()
    }

    fn set_volume(&self, percent: u8) -> String {
        format!("TV volume set to {}%", percent)
    }
}

pub struct Radio;

impl Device for Radio {
    fn turn_on(&self) -> String {
        "Radio is turned ON".to_string()
    }

    fn turn_off(&self) -> String {
        "Radio is turned OFF".to_string()
    }

    fn set_volume(&self, percent: u8) -> String {
        format!("Radio volume set to {}%", percent)
    }
}

// ============================================================================
// Abstraction side
// ============================================================================

pub trait RemoteControl {
    fn device(&self) -> &dyn Device;

    fn increase_volume(&self) -> Vec<String>;

    fn turn_on(&self) -> String {
        self.device().turn_on()
    }

    fn turn_off(&self) -> String {
        self.device().turn_off()
    }
}

pub struct BasicRemote {
    device: Box<dyn Device>,
}

impl BasicRemote {
    pub const VOLUME: u8 = 50;

    pub fn new(device: Box<dyn Device>) -> Self {
        Self { device }
    }
}

impl RemoteControl for BasicRemote {
    fn device(&self) -> &dyn Device {
        self.device.as_ref()
    }

    fn increase_volume(&self) -> Vec<String> {
        vec![
            "Basic Remote: Increasing volume".to_string(),
            self.device.set_volume(Self::VOLUME),
        ]
    }
}

pub struct AdvancedRemote {
    device: Box<dyn Device>,
}

impl AdvancedRemote {
    pub const VOLUME: u8 = 75;

    pub fn new(device: Box<dyn Device>) -> Self {
        Self { device }
    }

    pub fn mute(&self) -> Vec<String> {
        vec![
            "Advanced Remote: Muting device".to_string(),
            self.device.set_volume(0),
        ]
    }
}

impl RemoteControl for AdvancedRemote {
    fn device(&self) -> &dyn Device {
        self.device.as_ref()
    }

    fn increase_volume(&self) -> Vec<String> {
        vec![
            "Advanced Remote: Increasing volume".to_string(),
            self.device.set_volume(Self::VOLUME),
        ]
    }
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let basic: Box<dyn RemoteControl> = Box::new(BasicRemote::new(Box::new(Tv)));

    writeln!(out, "Using Basic Remote with TV:")?;
    writeln!(out, "{}", basic.turn_on())?;
    for line in basic.increase_volume() {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "{}", basic.turn_off())?;

    writeln!(out)?;
    writeln!(out, "----------------------")?;
    writeln!(out)?;

    let advanced = AdvancedRemote::new(Box::new(Radio));

    writeln!(out, "Using Advanced Remote with Radio:")?;
    writeln!(out, "{}", advanced.turn_on())?;
    for line in advanced.increase_volume().into_iter().chain(advanced.mute()) {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "{}", advanced.turn_off())?;
    Ok(())
}
