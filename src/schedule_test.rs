use super::*;

fn frame_task(n: usize) -> Task {
    Task::Tabs(TabsTask::Activate { tab: n })
}

#[test]
fn frames_fire_in_request_order() {
    let mut sched = ManualScheduler::new();
    sched.request_frame(frame_task(1));
    sched.request_frame(frame_task(2));
    assert_eq!(sched.pending_frames(), 2);
    assert_eq!(sched.take_frame(), vec![frame_task(1), frame_task(2)]);
    assert_eq!(sched.pending_frames(), 0);
    assert!(sched.take_frame().is_empty());
}

#[test]
fn cancelled_frame_never_fires() {
    let mut sched = ManualScheduler::new();
    let a = sched.request_frame(frame_task(1));
    sched.request_frame(frame_task(2));
    sched.cancel(a);
    assert_eq!(sched.take_frame(), vec![frame_task(2)]);
}

#[test]
fn timers_fire_by_due_time_then_request_order() {
    let mut sched = ManualScheduler::new();
    sched.set_timeout(500, frame_task(1));
    sched.set_timeout(50, frame_task(2));
    sched.set_timeout(50, frame_task(3));

    assert_eq!(sched.pop_due(40), None);
    assert_eq!(sched.pop_due(100), Some(frame_task(2)));
    assert_eq!(sched.now_ms(), 50);
    assert_eq!(sched.pop_due(100), Some(frame_task(3)));
    assert_eq!(sched.pop_due(100), None);
    sched.settle(100);
    assert_eq!(sched.now_ms(), 100);
    assert_eq!(sched.pop_due(600), Some(frame_task(1)));
    assert_eq!(sched.now_ms(), 500);
}

#[test]
fn timer_delay_is_relative_to_virtual_now() {
    let mut sched = ManualScheduler::new();
    sched.settle(1_000);
    sched.set_timeout(50, frame_task(1));
    assert_eq!(sched.pop_due(1_049), None);
    assert_eq!(sched.pop_due(1_050), Some(frame_task(1)));
}

#[test]
fn cancel_unknown_handle_is_ignored() {
    let mut sched = ManualScheduler::new();
    let handle = sched.set_timeout(10, frame_task(1));
    sched.cancel(TaskHandle(999));
    assert_eq!(sched.pending_timers(), 1);
    sched.cancel(handle);
    sched.cancel(handle);
    assert_eq!(sched.pending_timers(), 0);
}

#[test]
fn handles_are_unique() {
    let mut sched = ManualScheduler::new();
    let a = sched.request_frame(frame_task(1));
    let b = sched.set_timeout(0, frame_task(1));
    assert_ne!(a, b);
}
