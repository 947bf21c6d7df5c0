use std::io::{self, Write};

use crossterm::{cursor, queue, style, terminal};

/// Prend le contrôle du terminal pour la lecture et le restaure au drop.
///
/// À l'entrée : curseur masqué, écran effacé, curseur en haut à gauche.
/// Au drop (y compris après une erreur d'écriture ou un panic) : curseur
/// visible et couleurs réinitialisées.
///
/// # Example
/// ```
/// use cg_render::guard::TerminalGuard;
/// let mut out = Vec::new();
/// {
///     let _guard = TerminalGuard::enter(&mut out).unwrap();
/// }
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("\x1b[?25l"));
/// assert!(text.ends_with("\x1b[?25h\x1b[0m"));
/// ```
pub struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    /// Hide the cursor, clear the screen and home the cursor.
    ///
    /// # Errors
    /// Returns the write error; cleanup still runs since the guard already
    /// owns the writer.
    pub fn enter(out: W) -> io::Result<Self> {
        let mut guard = Self { out };
        queue!(
            guard.out,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        guard.out.flush()?;
        Ok(guard)
    }

    /// Writer behind the guard.
    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        // Best effort : rien à faire de plus si le terminal a disparu.
        if queue!(self.out, cursor::Show, style::ResetColor).is_err() {
            log::warn!("Impossible de restaurer le curseur");
        }
        let _ = self.out.flush();
    }
}
