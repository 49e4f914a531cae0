//! Audio system
//!
//! Opens the default output device and loops the background track.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::source::Buffered;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use orrery_core::{AssetLoadError, PresentationInitError};

/// A decoded track, buffered so it can be replayed without re-reading the file
#[derive(Clone)]
pub struct AudioClip {
    source: Buffered<Decoder<BufReader<File>>>,
}

impl AudioClip {
    pub fn channels(&self) -> u16 {
        self.source.channels()
    }

    pub fn sample_rate(&self) -> u32 {
        self.source.sample_rate()
    }
}

/// Owns the output stream and the sink currently playing
pub struct AudioSystem {
    sink: Option<Sink>,
    handle: OutputStreamHandle,
    _stream: OutputStream,
}

impl AudioSystem {
    /// Open the default output device
    pub fn open() -> Result<Self, PresentationInitError> {
        let (stream, handle) = OutputStream::try_default()
            .map_err(|e| PresentationInitError::AudioDevice(e.to_string()))?;
        log::info!("Opened default audio output");

        Ok(Self {
            sink: None,
            handle,
            _stream: stream,
        })
    }

    /// Decode a WAV file
    pub fn load_audio(path: &Path) -> Result<AudioClip, AssetLoadError> {
        let file = File::open(path).map_err(|e| AssetLoadError::audio(path, e.to_string()))?;
        let decoder =
            Decoder::new(BufReader::new(file)).map_err(|e| AssetLoadError::audio(path, e.to_string()))?;

        log::debug!(
            "Decoded {} ({} ch, {} Hz)",
            path.display(),
            decoder.channels(),
            decoder.sample_rate()
        );
        Ok(AudioClip {
            source: decoder.buffered(),
        })
    }

    /// Play `clip` forever at `volume`, replacing whatever was playing
    pub fn play_looping(&mut self, clip: &AudioClip, volume: f32) -> Result<(), PresentationInitError> {
        let sink = Sink::try_new(&self.handle)
            .map_err(|e| PresentationInitError::AudioDevice(e.to_string()))?;
        sink.set_volume(volume);
        sink.append(clip.source.clone().repeat_infinite());

        if let Some(previous) = self.sink.replace(sink) {
            previous.stop();
        }
        log::info!("Playing background music at volume {:.2}", volume);
        Ok(())
    }

    pub fn is_playing(&self) -> bool {
        self.sink.as_ref().map(|s| !s.empty() && !s.is_paused()).unwrap_or(false)
    }

    /// Stop playback, then close the output stream
    pub fn shutdown(mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        drop(self);
        log::info!("Closed audio output");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal 16-bit mono PCM WAV
    fn write_wav(path: &Path, samples: &[i16]) {
        let data_len = (samples.len() * 2) as u32;
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
        bytes.extend_from_slice(b"WAVEfmt ");
        bytes.extend_from_slice(&16u32.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
        bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
        bytes.extend_from_slice(&44100u32.to_le_bytes());
        bytes.extend_from_slice(&(44100u32 * 2).to_le_bytes());
        bytes.extend_from_slice(&2u16.to_le_bytes());
        bytes.extend_from_slice(&16u16.to_le_bytes());
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&data_len.to_le_bytes());
        for s in samples {
            bytes.extend_from_slice(&s.to_le_bytes());
        }
        std::fs::write(path, bytes).unwrap();
    }

    #[test]
    fn test_load_wav() {
        let path = std::env::temp_dir().join("orrery_audio_load_test.wav");
        write_wav(&path, &[0, 1000, -1000, 0]);

        let clip = AudioSystem::load_audio(&path).unwrap();
        assert_eq!(clip.channels(), 1);
        assert_eq!(clip.sample_rate(), 44100);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_audio_error() {
        let err = AudioSystem::load_audio(Path::new("music/Missing.wav")).err().unwrap();
        assert_eq!(err.kind, orrery_core::AssetKind::Audio);
        assert!(err.to_string().contains("Missing.wav"));
    }

    #[test]
    fn test_undecodable_file_is_audio_error() {
        let path = std::env::temp_dir().join("orrery_audio_garbage_test.wav");
        std::fs::write(&path, b"definitely not a wav file").unwrap();

        let err = AudioSystem::load_audio(&path).err().unwrap();
        assert!(err.to_string().starts_with("Unable to load audio"));

        let _ = std::fs::remove_file(&path);
    }
}
