/*
 * Copyright 2025 Andrey Kutejko <andy128k@gmail.com>
 *
 * This program is free software; you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation; either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program; if not, see <http://www.gnu.org/licenses/>.
 *
 * For more details see the file COPYING.
 */

//! ## Debug flags
//!
//! | Flag | Description                   |
//! |------|-------------------------------|
//! | a    | set all debug flags           |
//! | l    | panel navigation              |
//! | m    | connection debugging          |

use std::{
    collections::HashSet,
    sync::{LazyLock, Mutex},
};

pub const ALL_DEBUG_FLAGS: &str = "lm";

static DEBUG_FLAGS: LazyLock<Mutex<HashSet<char>>> = LazyLock::new(|| Mutex::default());

/// Replaces the active flag set. `a` switches on every known flag.
pub fn set_debug_flags(flags: &str) {
    if let Ok(mut guard) = DEBUG_FLAGS.lock() {
        guard.clear();
        if flags.contains('a') {
            guard.extend(ALL_DEBUG_FLAGS.chars());
        } else {
            guard.extend(flags.chars());
        }
    }
}

pub fn is_debug_enabled(flag: char) -> bool {
    if let Ok(guard) = DEBUG_FLAGS.lock() {
        guard.contains(&flag)
    } else {
        false
    }
}

macro_rules! debug {
    ($flag:literal, $fmt:expr) => {
        if crate::debug::is_debug_enabled($flag) {
            eprintln!($fmt);
        }
    };
    ($flag:literal, $fmt:expr, $($args:tt)*) => {
        if crate::debug::is_debug_enabled($flag) {
            eprintln!($fmt, $($args)*);
        }
    };
}

pub(crate) use debug;
