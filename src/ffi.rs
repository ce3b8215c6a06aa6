//! C ABI for embedding the engine in a host plugin.
//!
//! The host owns an opaque `LevelCalc*` from [`levelcalc_new`] until it
//! passes it to [`levelcalc_free`]. `levelcalc_process` and the two setters
//! must only be called from the audio thread (or with audio disconnected);
//! getters may be called from any thread.
//!
//! Null engine pointers are tolerated everywhere: mutators do nothing and
//! getters return the -120 floor.

#![allow(clippy::not_unsafe_ptr_arg_deref)] // FFI functions receive raw pointers from C/C++

use crate::core::{LevelCalc, MeterHandle, LUFS_FLOOR, MAX_CHANNELS};
use std::slice;

/// Create an unconfigured engine. Free with [`levelcalc_free`].
#[no_mangle]
pub extern "C" fn levelcalc_new() -> *mut LevelCalc {
    tracing::debug!("Creating level meter engine for host");
    Box::into_raw(Box::new(LevelCalc::new()))
}

/// # Safety
/// `calc` must come from [`levelcalc_new`] and not be used afterwards.
#[no_mangle]
pub unsafe extern "C" fn levelcalc_free(calc: *mut LevelCalc) {
    if !calc.is_null() {
        drop(Box::from_raw(calc));
        tracing::debug!("Level meter engine released");
    }
}

/// # Safety
/// `calc` must be null or a live engine not used concurrently.
#[no_mangle]
pub unsafe extern "C" fn levelcalc_set_sample_rate(calc: *mut LevelCalc, hz: u32) {
    if let Some(calc) = calc.as_mut() {
        calc.set_sample_rate(hz);
    }
}

/// # Safety
/// `calc` must be null or a live engine not used concurrently.
#[no_mangle]
pub unsafe extern "C" fn levelcalc_set_channels(calc: *mut LevelCalc, channels: usize) {
    if let Some(calc) = calc.as_mut() {
        calc.set_channels(channels);
    }
}

/// Meter one buffer of planar float audio.
///
/// # Safety
/// - `calc` must be null or a live engine not used concurrently
/// - `buffers` must be null or point to `channels` channel pointers, each null
///   or valid for `frames` floats
#[no_mangle]
pub unsafe extern "C" fn levelcalc_process(
    calc: *mut LevelCalc,
    buffers: *const *const f32,
    frames: u32,
    channels: usize,
) {
    let Some(calc) = calc.as_mut() else {
        return;
    };
    if buffers.is_null() || frames == 0 || channels == 0 {
        return;
    }

    let count = channels.min(MAX_CHANNELS);
    let ptrs = slice::from_raw_parts(buffers, count);
    if ptrs.iter().any(|ptr| ptr.is_null()) {
        return;
    }

    let frames = frames as usize;
    let empty: &[f32] = &[];
    let mut planar = [empty; MAX_CHANNELS];
    for (slot, &ptr) in planar.iter_mut().zip(ptrs) {
        *slot = slice::from_raw_parts(ptr, frames);
    }

    calc.process(&planar[..count], frames, count);
}

#[inline]
unsafe fn read(calc: *const LevelCalc, f: impl FnOnce(&MeterHandle) -> f32) -> f32 {
    calc.as_ref().map_or(LUFS_FLOOR, |calc| f(calc.meters()))
}

/// # Safety
/// `calc` must be null or a live engine.
#[no_mangle]
pub unsafe extern "C" fn levelcalc_get_channels(calc: *const LevelCalc) -> usize {
    calc.as_ref().map_or(0, |calc| calc.meters().channels())
}

/// # Safety
/// `calc` must be null or a live engine.
#[no_mangle]
pub unsafe extern "C" fn levelcalc_get_rms(calc: *const LevelCalc) -> f32 {
    read(calc, MeterHandle::rms)
}

/// # Safety
/// `calc` must be null or a live engine.
#[no_mangle]
pub unsafe extern "C" fn levelcalc_get_peak(calc: *const LevelCalc) -> f32 {
    read(calc, MeterHandle::peak)
}

/// # Safety
/// `calc` must be null or a live engine.
#[no_mangle]
pub unsafe extern "C" fn levelcalc_get_rms_ch(calc: *const LevelCalc, ch: usize) -> f32 {
    read(calc, |m| m.rms_ch(ch))
}

/// # Safety
/// `calc` must be null or a live engine.
#[no_mangle]
pub unsafe extern "C" fn levelcalc_get_peak_ch(calc: *const LevelCalc, ch: usize) -> f32 {
    read(calc, |m| m.peak_ch(ch))
}

/// # Safety
/// `calc` must be null or a live engine.
#[no_mangle]
pub unsafe extern "C" fn levelcalc_get_lufs_momentary(calc: *const LevelCalc) -> f32 {
    read(calc, MeterHandle::lufs_momentary)
}

/// # Safety
/// `calc` must be null or a live engine.
#[no_mangle]
pub unsafe extern "C" fn levelcalc_get_lufs_momentary_ch(calc: *const LevelCalc, ch: usize) -> f32 {
    read(calc, |m| m.lufs_momentary_ch(ch))
}

/// # Safety
/// `calc` must be null or a live engine.
#[no_mangle]
pub unsafe extern "C" fn levelcalc_get_lufs_short(calc: *const LevelCalc) -> f32 {
    read(calc, MeterHandle::lufs_short)
}

/// # Safety
/// `calc` must be null or a live engine.
#[no_mangle]
pub unsafe extern "C" fn levelcalc_get_lufs_short_ch(calc: *const LevelCalc, ch: usize) -> f32 {
    read(calc, |m| m.lufs_short_ch(ch))
}

/// # Safety
/// `calc` must be null or a live engine.
#[no_mangle]
pub unsafe extern "C" fn levelcalc_get_smoothed_lufs_short(calc: *const LevelCalc) -> f32 {
    read(calc, MeterHandle::smoothed_lufs_short)
}

/// # Safety
/// `calc` must be null or a live engine.
#[no_mangle]
pub unsafe extern "C" fn levelcalc_get_smoothed_lufs_short_ch(
    calc: *const LevelCalc,
    ch: usize,
) -> f32 {
    read(calc, |m| m.smoothed_lufs_short_ch(ch))
}

/// Legacy alias for [`levelcalc_get_lufs_momentary`].
///
/// # Safety
/// `calc` must be null or a live engine.
#[no_mangle]
pub unsafe extern "C" fn levelcalc_get_lufs(calc: *const LevelCalc) -> f32 {
    levelcalc_get_lufs_momentary(calc)
}
