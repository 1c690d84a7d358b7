// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Places a fixed fleet of straight ships and a handful of area abilities onto a square
//! grid.
//!
//! [`ships`] describes ships and resolves the cells they cover. [`abilities`] generates the
//! cone, cross, and diamond stencils. [`board`] holds the [`Grid`][board::Grid], the
//! placement engine and the stencil compositor, plus [`BoardSetup`][board::BoardSetup],
//! which owns the grid while things are added, and the finished [`Board`][board::Board].
//! [`scenario`] runs a whole batch with the standard fleet from [`config`].

pub mod abilities;
pub mod board;
pub mod config;
pub mod scenario;
pub mod ships;
