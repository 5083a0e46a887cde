use crate::{
    error::WalletError,
    rpc_server::method::wallets_bip38_create::WalletsBip38Request,
    wallet::{WalletInfo, WalletManager},
};

pub async fn wallets_bip38_info(
    wallets: &WalletManager,
    request: WalletsBip38Request,
) -> Result<WalletInfo, WalletError> {
    request.validate()?;
    let keys = wallets.get_bip38_wallet(&request.user_id, &request.bip38).await?;
    Ok(WalletInfo::from_keys(&keys, wallets.network(), true))
}
