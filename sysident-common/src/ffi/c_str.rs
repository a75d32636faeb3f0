// SPDX-License-Identifier: Mulan PSL v2
/*
 * Copyright (c) 2024 Huawei Technologies Co., Ltd.
 * sysident-common is licensed under Mulan PSL v2.
 * You can use this software according to the terms and conditions of the Mulan PSL v2.
 * You may obtain a copy of Mulan PSL v2 at:
 *         http://license.coscl.org.cn/MulanPSL2
 *
 * THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
 * EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
 * MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
 * See the Mulan PSL v2 for more details.
 */

use std::{
    ffi::{CStr, CString, OsStr, OsString},
    os::unix::ffi::OsStrExt,
};

pub trait CStrExt: AsRef<CStr> {
    fn as_os_str(&self) -> &OsStr {
        OsStr::from_bytes(self.as_ref().to_bytes())
    }

    fn to_os_string(&self) -> OsString {
        self.as_os_str().to_os_string()
    }
}

impl CStrExt for CStr {}
impl CStrExt for &CStr {}
impl CStrExt for CString {}
impl CStrExt for &CString {}

#[test]
fn test_cstr() {
    let os_str = OsStr::new("/bin/bash");
    let cstring = CString::new("/bin/bash").unwrap();

    assert_eq!(os_str.as_bytes(), cstring.to_bytes());
    assert_ne!(os_str.as_bytes(), cstring.to_bytes_with_nul());

    println!("Testing trait CStrExt::as_os_str...");
    assert_eq!(os_str, cstring.as_os_str());

    println!("Testing trait CStrExt::to_os_string...");
    assert_eq!(os_str.to_os_string(), cstring.to_os_string());
}
