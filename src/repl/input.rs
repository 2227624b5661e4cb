//! REPL Input
//!
//! Line input read on a detached OS thread and exposed as an async reader.
//! tokio's own stdin parks its blocking read on the runtime's blocking pool,
//! and dropping the runtime then waits for that read; a detached thread is
//! simply abandoned at process exit.

use std::io::{self, BufRead};
use std::thread;

use bytes::Bytes;
use tokio::io::AsyncBufRead;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tokio_util::io::StreamReader;
use tracing::debug;

/// Lines buffered between the reader thread and the prompt.
const LINE_BUFFER: usize = 16;

/// Spawns a thread that reads `reader` line by line and returns the lines as
/// an [`AsyncBufRead`].
///
/// The thread ends at end of input, after a read error (forwarded to the
/// async side), or once the returned reader is dropped and the next line
/// arrives. It is never joined.
///
/// # Errors
/// Returns an error if the OS refuses to spawn the thread.
pub fn detached_reader<R>(reader: R) -> io::Result<impl AsyncBufRead + Unpin + Send>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel::<io::Result<Bytes>>(LINE_BUFFER);

    thread::Builder::new()
        .name("pokedex-input".to_string())
        .spawn(move || read_lines(reader, tx))?;

    Ok(StreamReader::new(ReceiverStream::new(rx)))
}

/// Reads stdin on a detached thread.
pub fn stdin_reader() -> io::Result<impl AsyncBufRead + Unpin + Send> {
    detached_reader(io::BufReader::new(io::stdin()))
}

fn read_lines<R: BufRead>(mut reader: R, tx: mpsc::Sender<io::Result<Bytes>>) {
    loop {
        let mut line = String::new();
        let sent = match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => tx.blocking_send(Ok(Bytes::from(line))),
            Err(e) => {
                let _ = tx.blocking_send(Err(e));
                break;
            }
        };
        if sent.is_err() {
            break;
        }
    }
    debug!("Input reader thread finished");
}
