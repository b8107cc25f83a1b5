//! Generates the named swizzle accessors (`v.zyx()`, `v.bgr_mut()`, ...) of `Vector`.
//!
//! Every word of 2 to 4 letters over one axis group gets a read accessor. Words without a repeated
//! letter also get a `_mut` accessor; the others would be rejected by the write-path assertions
//! anyway, so they are not emitted at all.

use std::{env, fmt::Write, fs, path::PathBuf};

const GROUPS: [[char; 4]; 3] = [
    ['x', 'y', 'z', 'w'],
    ['r', 'g', 'b', 'a'],
    ['s', 't', 'p', 'q'],
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let mut out = String::new();
    out.push_str("impl<T, const N: usize> Vector<T, N> {\n");
    for group in GROUPS {
        for len in 2..=4 {
            for_each_word(len, &mut |axes| emit(&mut out, group, axes));
        }
    }
    out.push_str("}\n");

    let dir = PathBuf::from(env::var_os("OUT_DIR").expect("cargo did not set OUT_DIR"));
    fs::write(dir.join("swizzle_accessors.rs"), out).expect("failed to write swizzle accessors");
}

fn for_each_word(len: usize, f: &mut dyn FnMut(&[usize])) {
    fn recurse(word: &mut Vec<usize>, len: usize, f: &mut dyn FnMut(&[usize])) {
        if word.len() == len {
            f(word);
            return;
        }
        for axis in 0..4 {
            word.push(axis);
            recurse(word, len, f);
            word.pop();
        }
    }

    recurse(&mut Vec::with_capacity(len), len, f);
}

fn emit(out: &mut String, group: [char; 4], axes: &[usize]) {
    let name: String = axes.iter().map(|&a| group[a]).collect();
    let pattern = axes
        .iter()
        .enumerate()
        .fold(0u16, |acc, (k, &a)| acc | (a as u16) << (4 * k));
    let n = axes.len();

    writeln!(out, "    /// Borrows the `{name}` components as a read-only swizzle view.").unwrap();
    writeln!(out, "    #[inline]").unwrap();
    writeln!(
        out,
        "    pub fn {name}(&self) -> View<'_, T, {n}, N, {pattern:#06x}> {{\n        \
         self.swizzle::<{n}, {pattern:#06x}>()\n    }}"
    )
    .unwrap();

    let distinct = axes
        .iter()
        .enumerate()
        .all(|(i, a)| !axes[..i].contains(a));
    if distinct {
        writeln!(
            out,
            "    /// Borrows the `{name}` components as a writable swizzle view."
        )
        .unwrap();
        writeln!(out, "    #[inline]").unwrap();
        writeln!(
            out,
            "    pub fn {name}_mut(&mut self) -> ViewMut<'_, T, {n}, N, {pattern:#06x}> \
             {{\n        self.swizzle_mut::<{n}, {pattern:#06x}>()\n    }}"
        )
        .unwrap();
    }
}
