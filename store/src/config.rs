// III-IV
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Configuration of the server.

use derivative::Derivative;
use shop_core::env::get_optional_var;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port to listen on when none is configured.
const DEFAULT_PORT: u16 = 3000;

/// Options to start the server.
#[derive(Derivative)]
#[derivative(Debug, Default, PartialEq)]
pub struct ServerOptions {
    /// Address to bind to.
    #[derivative(Default(value = "IpAddr::V4(Ipv4Addr::LOCALHOST)"))]
    pub address: IpAddr,

    /// Port to listen on.
    #[derivative(Default(value = "DEFAULT_PORT"))]
    pub port: u16,
}

impl ServerOptions {
    /// Initializes a set of options from environment variables whose name is prefixed with the
    /// given `prefix`.
    ///
    /// This will use variables such as `<prefix>_ADDRESS` and `<prefix>_PORT`, falling back to
    /// the defaults for those that are not set.
    pub fn from_env(prefix: &str) -> Result<ServerOptions, String> {
        let defaults = ServerOptions::default();
        Ok(ServerOptions {
            address: get_optional_var::<IpAddr>(prefix, "ADDRESS")?.unwrap_or(defaults.address),
            port: get_optional_var::<u16>(prefix, "PORT")?.unwrap_or(defaults.port),
        })
    }

    /// Returns the socket address to bind to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}
