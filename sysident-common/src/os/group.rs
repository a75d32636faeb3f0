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

use std::ffi::OsString;

use log::error;
use nix::unistd::{self, getegid, Gid};

use crate::ffi::CStrExt;

/// Owned snapshot of one group database entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub passwd: OsString,
    pub gid: u32,
    pub members: Vec<String>,
}

impl From<unistd::Group> for Group {
    fn from(group: unistd::Group) -> Self {
        Self {
            name: group.name,
            passwd: group.passwd.to_os_string(),
            gid: group.gid.as_raw(),
            members: group.mem,
        }
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "name:    {}", self.name)?;
        writeln!(f, "passwd:  {}", self.passwd.to_string_lossy())?;
        writeln!(f, "gid:     {}", self.gid)?;
        write!(f, "members: {}", self.members.join(", "))?;

        Ok(())
    }
}

pub fn from_gid(gid: Option<Gid>) -> Option<Group> {
    let gid = gid.unwrap_or_else(getegid);

    match unistd::Group::from_gid(gid) {
        Ok(group) => group.map(Group::from),
        Err(e) => {
            error!(
                "Failed to read group record of gid {}, {}",
                gid,
                e.to_string().to_lowercase()
            );
            None
        }
    }
}

pub fn from_name<S: AsRef<str>>(name: S) -> Option<Group> {
    let name = name.as_ref();
    // A name holding an interior nul byte cannot occur in the database
    if name.contains('\0') {
        return None;
    }

    match unistd::Group::from_name(name) {
        Ok(group) => group.map(Group::from),
        Err(e) => {
            error!(
                "Failed to read group record of '{}', {}",
                name,
                e.to_string().to_lowercase()
            );
            None
        }
    }
}

#[test]
fn test() {
    const UNUSED_GID: u32 = u32::MAX - 3;

    let current = self::from_gid(None).expect("Failed to read current group record");
    println!("{}", current);
    assert!(!current.name.is_empty());
    assert_eq!(current.gid, getegid().as_raw());

    let by_gid = self::from_gid(Some(Gid::from_raw(current.gid)))
        .expect("Failed to read group record by gid");
    assert_eq!(by_gid, current);

    let by_name = self::from_name(&current.name).expect("Failed to read group record by name");
    assert_eq!(by_name, current);

    assert_eq!(self::from_gid(Some(Gid::from_raw(UNUSED_GID))), None);
    assert_eq!(self::from_name("no\0group"), None);
}

#[test]
fn test_convert() {
    use std::ffi::CString;

    let empty = Group::from(unistd::Group {
        name: String::from("nogroup"),
        passwd: CString::new("x").unwrap(),
        gid: Gid::from_raw(65534),
        mem: Vec::new(),
    });
    assert_eq!(empty.members, Vec::<String>::new());
    assert_eq!(
        empty.to_string(),
        "name:    nogroup\n\
         passwd:  x\n\
         gid:     65534\n\
         members: "
    );

    let wheel = Group::from(unistd::Group {
        name: String::from("wheel"),
        passwd: CString::new("x").unwrap(),
        gid: Gid::from_raw(10),
        mem: vec![String::from("root"), String::from("alice")],
    });
    assert_eq!(wheel.members, vec!["root", "alice"]);
    assert_eq!(
        wheel.to_string(),
        "name:    wheel\n\
         passwd:  x\n\
         gid:     10\n\
         members: root, alice"
    );
}
