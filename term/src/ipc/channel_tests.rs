use std::{sync::mpsc::channel, thread};

use super::*;

#[test]
fn sends_and_receives_across_threads() {
    let (tx, rx) = channel::<u64>();
    let sender = ChannelSender::new(tx);
    let receiver = ChannelReceiver::new(rx);

    let cloned = sender.box_clone();

    thread::spawn(move || {
        cloned.send(7).unwrap();
    })
    .join()
    .unwrap();

    assert_eq!(receiver.recv().unwrap(), 7);
}

#[test]
fn try_recv_errors_when_empty() {
    let (tx, rx) = channel::<u64>();
    let _sender = ChannelSender::new(tx);
    let receiver = ChannelReceiver::new(rx);

    assert!(receiver.try_recv().is_err());
}

#[test]
fn send_errors_when_receiver_dropped() {
    let (tx, rx) = channel::<u64>();
    let sender = ChannelSender::new(tx);
    drop(rx);

    assert!(sender.send(1).is_err());
}

#[test]
fn recv_errors_when_senders_dropped() {
    let (tx, rx) = channel::<u64>();
    let receiver = ChannelReceiver::new(rx);
    drop(tx);

    assert!(receiver.recv().is_err());
}
