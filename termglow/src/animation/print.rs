// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.


use crossterm::{QueueableCommand,
                cursor::MoveToColumn,
                style::Print,
                terminal::{Clear, ClearType}};

use crate::{LockedOutputDevice, OutputDevice, lock_output_device_as_mut};

/// Overwrites the current line with `frame`. The cursor stays on the same line so the
/// next frame replaces this one.
///
/// # Errors
///
/// Returns the error from the underlying writer, eg a closed pipe.
pub fn print_frame(output_device: &OutputDevice, frame: &str) -> std::io::Result<()> {
    let writer: LockedOutputDevice<'_> = lock_output_device_as_mut!(output_device);
    writer
        .queue(MoveToColumn(0))?
        .queue(Clear(ClearType::CurrentLine))?
        .queue(Print(frame))?;
    writer.flush()
}

/// Replaces the current line with `line` and moves to the next one.
///
/// # Errors
///
/// Returns the error from the underlying writer, eg a closed pipe.
pub fn print_final_line(output_device: &OutputDevice, line: &str) -> std::io::Result<()> {
    let writer: LockedOutputDevice<'_> = lock_output_device_as_mut!(output_device);
    writer
        .queue(MoveToColumn(0))?
        .queue(Clear(ClearType::CurrentLine))?
        .queue(Print(line))?
        .queue(Print('\n'))?;
    writer.flush()
}

/// Erases the current line, leaving the cursor at column 0.
///
/// # Errors
///
/// Returns the error from the underlying writer, eg a closed pipe.
pub fn clear_line(output_device: &OutputDevice) -> std::io::Result<()> {
    let writer: LockedOutputDevice<'_> = lock_output_device_as_mut!(output_device);
    writer
        .queue(MoveToColumn(0))?
        .queue(Clear(ClearType::CurrentLine))?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::OutputDeviceExt;

    #[test]
    fn test_print_frame_clears_line_first() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        print_frame(&output_device, "one").unwrap();
        print_frame(&output_device, "two").unwrap();

        let raw = stdout_mock.get_copy_of_buffer_as_string();
        assert_eq!(raw, "\x1b[1G\x1b[2Kone\x1b[1G\x1b[2Ktwo");
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string_strip_ansi(), "onetwo");
    }

    #[test]
    fn test_print_final_line_ends_with_newline() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        print_final_line(&output_device, "✔ done").unwrap();
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string_strip_ansi(), "✔ done\n");
    }

    #[test]
    fn test_clear_line_writes_no_text() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        clear_line(&output_device).unwrap();
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string_strip_ansi(), "");
    }

    #[test]
    fn test_write_errors_are_returned() {
        let (output_device, failing_writer) = OutputDevice::new_failing();
        let result = print_frame(&output_device, "frame");
        assert!(result.is_err());
        assert_eq!(failing_writer.attempt_count(), 1);
    }
}
