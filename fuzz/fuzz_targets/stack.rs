#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use linkstack::{EmptyStack, Stack};

#[derive(Arbitrary, Debug)]
enum Action {
    Push(String),
    PushCloned(usize),
    PushEmplace(u8, String),
    Pop,
    Take,
}

use self::Action::*;

fuzz_target!(|actions: Vec<Action>| {
    let mut stack = Stack::new();
    let mut model: Vec<String> = Vec::new();
    for action in actions {
        match action {
            Push(data) => {
                model.push(data.clone());
                stack.push(data);
            }
            PushCloned(index) => {
                if !model.is_empty() {
                    let value = model[index % model.len()].clone();
                    stack.push_cloned(&value);
                    model.push(value);
                }
            }
            PushEmplace(count, data) => {
                let value = data.repeat(count as usize % 4);
                stack.push_emplace(value.as_str());
                model.push(value);
            }
            Pop => {
                assert_eq!(model.pop(), stack.pop());
            }
            Take => {
                let taken = stack.take();
                assert!(stack.is_empty());
                assert_eq!(model.len(), taken.len());
                stack = taken;
            }
        }
        assert_eq!(stack.is_empty(), stack.len() == 0);
        assert_eq!(model.len(), stack.len());
        assert_eq!(model.last().ok_or(EmptyStack), stack.head());
    }
});
