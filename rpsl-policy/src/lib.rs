// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

pub mod command;
pub mod commands;
pub mod policy;
pub mod utils;

pub use crate::policy::diagnostics::{Diagnostic, Diagnostics, LogDiagnostics};
pub use crate::policy::driver::{AttributeEvent, AttributeRecord, AutNumParser};
pub use crate::policy::errors::Error;
pub use crate::policy::exprs::AutNum;
pub use crate::policy::grammar::{Grammar, PolicyAttribute, RpslGrammar};
