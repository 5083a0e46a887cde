// RPC Integration Tests
//
// CONFIG: standalone devnet, in-memory store and ledger, no auth
// TESTS: JSON-RPC behaviour of every method against an in-process server
//        - Liveness over POST and the GET probe
//        - transactions.info / create / broadcast / bip38.create
//        - wallets.create / bip38.create / bip38.info
//        - 401, 404 and 422 error paths

mod basic_endpoints;
mod transactions;
mod wallets;

// Make common utilities available
#[path = "../src/common/mod.rs"]
mod common;
