use std::io::{self, BufWriter, Write};
use std::time::{Duration, Instant};

use cg_core::config::PlaybackConfig;
use cg_core::error::Result;
use cg_core::frame::Sequence;
use cg_core::traits::FrameClock;
use crossterm::{cursor, queue};

use crate::guard::TerminalGuard;

/// Horloge réelle : bloque le thread appelant.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadClock;

impl FrameClock for ThreadClock {
    fn wait(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Joue `seq` sur la sortie standard, `loops` fois.
///
/// `loops <= 0` : aucune frame écrite, mais le curseur est tout de même
/// masqué puis restauré.
///
/// # Errors
/// Erreur d'écriture sur le terminal. Le curseur et les couleurs sont
/// restaurés dans tous les cas.
pub fn play(seq: &Sequence, loops: i64) -> Result<()> {
    let stdout = BufWriter::new(io::stdout().lock());
    play_with(stdout, seq, &PlaybackConfig::with_loops(loops), ThreadClock)
}

/// Boucle de lecture : pour chaque frame, curseur en haut à gauche (pas de
/// clear, pas de scintillement), écriture des lignes, flush, puis attente de
/// `config.frame_wait(frame.delay)`.
///
/// La sortie est flushée une fois par frame, jamais par glyphe.
///
/// # Errors
/// Erreur d'écriture sur `out`. Le [`TerminalGuard`] restaure le terminal
/// avant le retour.
///
/// # Example
/// ```
/// use cg_core::config::PlaybackConfig;
/// use cg_core::frame::Sequence;
/// use cg_render::playback::{ThreadClock, play_with};
///
/// let mut out = Vec::new();
/// let config = PlaybackConfig::with_loops(3);
/// play_with(&mut out, &Sequence::default(), &config, ThreadClock).unwrap();
/// assert_eq!(out, b"\x1b[?25l\x1b[2J\x1b[1;1H\x1b[?25h\x1b[0m");
/// ```
pub fn play_with<W, C>(out: W, seq: &Sequence, config: &PlaybackConfig, mut clock: C) -> Result<()>
where
    W: Write,
    C: FrameClock,
{
    let mut guard = TerminalGuard::enter(out)?;
    let out = guard.writer();

    log::info!(
        "Lecture : {} frames × {} boucles",
        seq.len(),
        config.loops.max(0)
    );
    if seq.is_empty() {
        return Ok(());
    }
    let started = Instant::now();
    let mut written = 0usize;

    let mut remaining = config.loops;
    while remaining > 0 {
        for frame in seq {
            queue!(out, cursor::MoveTo(0, 0))?;
            for line in &frame.lines {
                out.write_all(line.as_str().as_bytes())?;
            }
            out.flush()?;
            written += 1;
            clock.wait(config.frame_wait(frame.delay));
        }
        remaining -= 1;
    }

    log::info!(
        "Lecture terminée : {written} frames en {:.2}s",
        started.elapsed().as_secs_f64()
    );
    Ok(())
}
