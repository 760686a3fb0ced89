//! Facade Pattern
//!
//! Four home-theater subsystems, one object in front of them with two
//! methods. The client never touches the subsystems directly.

use std::io::{self, Write};

mod home_theater {
    pub struct Amplifier;

    impl Amplifier {
        pub fn turn_on(&self) -> String {
            "Amplifier is ON".to_string()
        }

        pub fn turn_off(&self) -> String {
            "Amplifier is OFF".to_string()
        }
    }

    pub struct DvdPlayer;

    impl DvdPlayer {
        pub fn play_movie(&self, movie: &str) -> String {
            format!("Playing movie: {}", movie)
        }

        pub fn stop_movie(&self) -> String {
            "Stopping movie".to_string()
        }
    }

    pub struct Projector;

    impl Projector {
        pub fn turn_on(&self) -> String {
            "Projector is ON".to_string()
        }

        pub fn turn_off(&self) -> String {
            "Projector is OFF".to_string()
        }
    }

    pub struct Lights;

    impl Lights {
        pub fn dim(&self) -> String {
            "Lights dimmed".to_string()
        }

        pub fn turn_on(&self) -> String {
            "Lights turned ON".to_string()
        }
    }
}

use home_theater::{Amplifier, DvdPlayer, Lights, Projector};

pub struct HomeTheaterFacade {
    amp: Amplifier,
    dvd: DvdPlayer,
    projector: Projector,
    lights: Lights,
}

impl Default for HomeTheaterFacade {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeTheaterFacade {
    pub fn new() -> Self {
        Self {
            amp: Amplifier,
            dvd: DvdPlayer,
            projector: Projector,
            lights: Lights,
        }
    }

    pub fn watch_movie(&self, movie: &str) -> Vec<String> {
        vec![
            String::new(),
            "Starting Movie Night...".to_string(),
            self.lights.dim(),
            self.amp.turn_on(),
            self.projector.turn_on(),
            self.dvd.play_movie(movie),
        ]
    }

    /// Shuts down in reverse order of `watch_movie`.
    pub fn stop_movie(&self) -> Vec<String> {
        vec![
            String::new(),
            "Shutting down Home Theater...".to_string(),
            self.dvd.stop_movie(),
            self.projector.turn_off(),
            self.amp.turn_off(),
            self.lights.turn_on(),
        ]
    }
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let home_theater = HomeTheaterFacade::new();

    let session = home_theater
        .watch_movie("Inception")
        .into_iter()
        .chain(home_theater.stop_movie());
    for line in session {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_movie_names_the_movie() {
        let lines = HomeTheaterFacade::new().watch_movie("Dune");
        assert_eq!(lines.last().unwrap(), "Playing movie: Dune");
    }

    #[test]
    fn test_transcript() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n\
             Starting Movie Night...\n\
             Lights dimmed\n\
             Amplifier is ON\n\
             Projector is ON\n\
             Playing movie: Inception\n\
             \n\
             Shutting down Home Theater...\n\
             Stopping movie\n\
             Projector is OFF\n\
             Amplifier is OFF\n\
             Lights turned ON\n"
        );
    }
}
