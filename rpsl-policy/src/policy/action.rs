use crate::policy::exprs::{ActionMap, ActionValue, CommunityCall, MethodCall};
use crate::policy::grammar::{Assigned, LexedAction};

const COMMUNITY: &str = "community";

fn push_community(cleaned: &mut ActionMap, call: CommunityCall) {
    if let Some(ActionValue::Community(calls)) = cleaned.get_mut(COMMUNITY) {
        calls.push(call);
    } else {
        cleaned.insert(COMMUNITY.to_string(), ActionValue::Community(vec![call]));
    }
}

fn push_method_call(cleaned: &mut ActionMap, rp_attribute: String, call: MethodCall) {
    if let Some(ActionValue::MethodCalls(calls)) = cleaned.get_mut(&rp_attribute) {
        calls.push(call);
    } else {
        cleaned.insert(rp_attribute, ActionValue::MethodCalls(vec![call]));
    }
}

///
/// Folds the actions of one peering into a single map keyed by the attribute
/// they act on.
///
/// Assignments replace what was there. Community manipulations, `.=` included,
/// are appended to the `community` list, other method calls to the list of
/// their attribute, both in the order they were written. An append onto a
/// key that currently holds an assignment starts a new list.
///
pub fn clean_actions<I>(actions: I) -> ActionMap
where
    I: IntoIterator<Item = LexedAction>,
{
    let mut cleaned = ActionMap::new();
    for action in actions {
        match action {
            LexedAction::Assignment { assignee, assigned } => {
                let value = match assigned {
                    Assigned::Value(value) => ActionValue::Assigned(value),
                    Assigned::Set(set) => ActionValue::AssignedSet(set),
                };
                cleaned.insert(assignee, value);
            }
            LexedAction::Community(call) => push_community(&mut cleaned, call),
            LexedAction::AddCommunity(args) => push_community(
                &mut cleaned,
                CommunityCall {
                    method: Some("=".to_string()),
                    args,
                },
            ),
            LexedAction::MethodCall {
                rp_attribute,
                method,
                args,
            } => push_method_call(&mut cleaned, rp_attribute, MethodCall { method, args }),
        }
    }
    cleaned
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod action_tests;
