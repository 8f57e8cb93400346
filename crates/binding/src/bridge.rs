//! DAI token bridge bindings.
//!
//! DAI is bridged through a dedicated pair of contracts instead of the standard bridge,
//! since the L2 token is minted and burned by the bridge itself.

use alloy_sol_types::sol;

sol! {
    /// L1DAITokenBridge - escrows DAI on L1
    #[sol(rpc)]
    interface IL1DAITokenBridge {
        event ERC20DepositInitiated(
            address indexed _l1Token,
            address indexed _l2Token,
            address indexed _from,
            address _to,
            uint256 _amount,
            bytes _data
        );

        function l1Token() external view returns (address);

        function l2Token() external view returns (address);

        function l2DAITokenBridge() external view returns (address);

        function isOpen() external view returns (uint256);

        function depositERC20(
            address _l1Token,
            address _l2Token,
            uint256 _amount,
            uint32 _l2Gas,
            bytes calldata _data
        ) external;

        function depositERC20To(
            address _l1Token,
            address _l2Token,
            address _to,
            uint256 _amount,
            uint32 _l2Gas,
            bytes calldata _data
        ) external;
    }

    /// L2DAITokenBridge - mints and burns DAI on L2
    #[sol(rpc)]
    interface IL2DAITokenBridge {
        function l1Token() external view returns (address);

        function l2Token() external view returns (address);

        function l1DAITokenBridge() external view returns (address);

        function isOpen() external view returns (uint256);

        function withdraw(address _l2Token, uint256 _amount, uint32 _l1Gas, bytes calldata _data) external;

        function withdrawTo(
            address _l2Token,
            address _to,
            uint256 _amount,
            uint32 _l1Gas,
            bytes calldata _data
        ) external;
    }
}
