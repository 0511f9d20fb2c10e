//! macOS binding to the DictionaryServices framework.
//!
//! `DCSCopyTextDefinition` is public API. The enumeration and naming
//! calls (`DCSCopyAvailableDictionaries`, `DCSGetActiveDictionaries`,
//! `DCSDictionaryGetName`, `DCSDictionaryGetShortName`) are not in the
//! public headers but have been stable across macOS releases; they are
//! what Dictionary.app itself uses.

use std::ffi::c_void;
use std::os::raw::c_char;
use std::ptr;

use super::{DictHandle, DictionaryService, ServiceDictionary};

type Boolean = u8;
type CFIndex = isize;
type CFTypeRef = *const c_void;
type CFAllocatorRef = *const c_void;
type CFArrayRef = *const c_void;
type CFStringRef = *const c_void;
type DCSDictionaryRef = *const c_void;

#[repr(C)]
struct CFRange {
    location: CFIndex,
    length: CFIndex,
}

const UTF8: u32 = 0x0800_0100; // kCFStringEncodingUTF8

#[link(name = "CoreFoundation", kind = "framework")]
extern "C" {
    fn CFArrayGetCount(array: CFArrayRef) -> CFIndex;
    fn CFArrayGetValueAtIndex(array: CFArrayRef, idx: CFIndex) -> *const c_void;
    fn CFRelease(cf: CFTypeRef);
    fn CFStringCreateWithBytes(
        alloc: CFAllocatorRef,
        bytes: *const u8,
        num_bytes: CFIndex,
        encoding: u32,
        is_external_representation: Boolean,
    ) -> CFStringRef;
    fn CFStringGetLength(s: CFStringRef) -> CFIndex;
    fn CFStringGetMaximumSizeForEncoding(length: CFIndex, encoding: u32) -> CFIndex;
    fn CFStringGetCString(
        s: CFStringRef,
        buffer: *mut c_char,
        buffer_size: CFIndex,
        encoding: u32,
    ) -> Boolean;
}

#[link(name = "CoreServices", kind = "framework")]
extern "C" {
    fn DCSCopyAvailableDictionaries() -> CFArrayRef;
    fn DCSGetActiveDictionaries() -> CFArrayRef;
    fn DCSDictionaryGetName(dictionary: DCSDictionaryRef) -> CFStringRef;
    fn DCSDictionaryGetShortName(dictionary: DCSDictionaryRef) -> CFStringRef;
    fn DCSCopyTextDefinition(
        dictionary: DCSDictionaryRef,
        text: CFStringRef,
        range: CFRange,
    ) -> CFStringRef;
}

fn string_from_cf(s: CFStringRef) -> Option<String> {
    if s.is_null() {
        return None;
    }
    unsafe {
        let length = CFStringGetLength(s);
        let max = CFStringGetMaximumSizeForEncoding(length, UTF8) + 1;
        let mut buf = vec![0u8; max as usize];
        if CFStringGetCString(s, buf.as_mut_ptr() as *mut c_char, max, UTF8) == 0 {
            return None;
        }
        let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
        buf.truncate(end);
        String::from_utf8(buf).ok()
    }
}

fn cf_from_str(s: &str) -> CFStringRef {
    unsafe { CFStringCreateWithBytes(ptr::null(), s.as_ptr(), s.len() as CFIndex, UTF8, 0) }
}

/// Client for the live DictionaryServices framework.
///
/// The dictionary references enumerated at construction are owned by the
/// framework and stay valid for the process lifetime; the handle table
/// only keeps them addressable by index.
pub struct CoreServicesClient {
    refs: Vec<DCSDictionaryRef>,
}

impl CoreServicesClient {
    pub fn new() -> Self {
        let mut refs = Vec::new();
        unsafe {
            // The returned array (and the references it owns) is kept
            // alive for the process lifetime rather than released.
            let array = DCSCopyAvailableDictionaries();
            if !array.is_null() {
                for idx in 0..CFArrayGetCount(array) {
                    refs.push(CFArrayGetValueAtIndex(array, idx) as DCSDictionaryRef);
                }
            }
        }
        Self { refs }
    }

    fn describe(&self, idx: usize) -> ServiceDictionary {
        let dict = self.refs[idx];
        let short_name = unsafe { string_from_cf(DCSDictionaryGetShortName(dict)) }
            .or_else(|| unsafe { string_from_cf(DCSDictionaryGetName(dict)) })
            .unwrap_or_default();
        ServiceDictionary {
            handle: DictHandle(idx),
            short_name,
        }
    }
}

impl Default for CoreServicesClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionaryService for CoreServicesClient {
    fn installed(&self) -> Vec<ServiceDictionary> {
        (0..self.refs.len()).map(|idx| self.describe(idx)).collect()
    }

    fn active(&self) -> Vec<ServiceDictionary> {
        let mut out = Vec::new();
        unsafe {
            // Get, not Copy: the framework owns this array.
            let array = DCSGetActiveDictionaries();
            if array.is_null() {
                return out;
            }
            for idx in 0..CFArrayGetCount(array) {
                let dict = CFArrayGetValueAtIndex(array, idx) as DCSDictionaryRef;
                if let Some(known) = self.refs.iter().position(|&r| r == dict) {
                    out.push(self.describe(known));
                }
            }
        }
        out
    }

    fn display_name(&self, handle: DictHandle) -> String {
        unsafe { string_from_cf(DCSDictionaryGetName(self.refs[handle.0])) }.unwrap_or_default()
    }

    fn lookup(&self, handle: DictHandle, word: &str) -> Option<String> {
        unsafe {
            let text = cf_from_str(word);
            if text.is_null() {
                return None;
            }
            let range = CFRange {
                location: 0,
                length: CFStringGetLength(text),
            };
            let definition = DCSCopyTextDefinition(self.refs[handle.0], text, range);
            let result = string_from_cf(definition);
            if !definition.is_null() {
                CFRelease(definition);
            }
            CFRelease(text);
            result
        }
    }
}
