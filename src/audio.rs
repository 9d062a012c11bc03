/// Background-music playback, entirely outside the simulation.
///
/// Every failure path here is logged and swallowed: the game must stay
/// playable with no audio device, a missing music file, or a broken
/// decode.  Compiled only with the `sound` feature.

use std::fs::File;
use std::io::BufReader;

use log::{info, warn};
use rodio::{Decoder, OutputStream, Sink, Source};

/// Looping track played while the game runs.
const MUSIC_FILE: &str = "music.mp3";

const MUSIC_VOLUME: f32 = 0.5;

/// Handle that keeps the output stream and sink alive; dropping it
/// stops playback.
pub struct Music {
    _stream: OutputStream,
    _sink: Sink,
}

/// Start the background track on an infinite loop.  Returns `None` (and
/// logs why) when anything along the way is unavailable.
pub fn start() -> Option<Music> {
    let (stream, handle) = match OutputStream::try_default() {
        Ok(pair) => pair,
        Err(e) => {
            warn!("no audio output device, music disabled: {e}");
            return None;
        }
    };

    let file = match File::open(MUSIC_FILE) {
        Ok(f) => f,
        Err(e) => {
            warn!("music file {MUSIC_FILE} not found or could not play: {e}");
            return None;
        }
    };

    let source = match Decoder::new(BufReader::new(file)) {
        Ok(s) => s,
        Err(e) => {
            warn!("could not decode {MUSIC_FILE}: {e}");
            return None;
        }
    };

    let sink = match Sink::try_new(&handle) {
        Ok(s) => s,
        Err(e) => {
            warn!("audio sink unavailable: {e}");
            return None;
        }
    };

    sink.set_volume(MUSIC_VOLUME);
    sink.append(source.repeat_infinite());
    info!("playing {MUSIC_FILE} on loop");

    Some(Music {
        _stream: stream,
        _sink: sink,
    })
}
