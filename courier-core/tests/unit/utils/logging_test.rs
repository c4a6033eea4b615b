use super::*;
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn can_write_each_message_as_line() {
    let buffer = SharedBuffer::default();
    let logger = create_writer_logger(buffer.clone());

    logger("episode 100/1000 | total reward: -7.50");
    logger("training completed");

    let content = String::from_utf8(buffer.0.borrow().clone()).unwrap();
    assert_eq!(content, "episode 100/1000 | total reward: -7.50\ntraining completed\n");
}

#[test]
fn can_ignore_messages_with_noop_logger() {
    let logger = create_noop_logger();

    logger("ignored");
}
