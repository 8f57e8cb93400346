//! Token contract bindings.
//!
//! ERC20 is the shape shared by bridged tokens, OVM_ETH and WETH9 extend it.

use alloy_sol_types::sol;

sol! {
    /// Standard ERC20 token interface
    #[sol(rpc)]
    interface IERC20 {
        event Transfer(address indexed from, address indexed to, uint256 value);

        event Approval(address indexed owner, address indexed spender, uint256 value);

        function balanceOf(address account) external view returns (uint256);

        function allowance(address owner, address spender) external view returns (uint256);

        function approve(address spender, uint256 amount) external returns (bool);

        function transfer(address recipient, uint256 amount) external returns (bool);

        function transferFrom(address sender, address recipient, uint256 amount) external returns (bool);

        function decimals() external view returns (uint8);

        function totalSupply() external view returns (uint256);
    }

    /// OVM_ETH - ERC20 representation of the L2 native value token
    /// Address: 0xDeadDeAddeAddEAddeadDEaDDEAdDeaDDeAD0000
    #[sol(rpc)]
    interface IOVMETH {
        function balanceOf(address account) external view returns (uint256);

        function totalSupply() external view returns (uint256);

        function l1Token() external view returns (address);

        function l2Bridge() external view returns (address);
    }

    /// WETH9 - wrapped native value token
    /// Address: 0x4200000000000000000000000000000000000006
    #[sol(rpc)]
    interface IWETH9 {
        event Deposit(address indexed dst, uint256 wad);

        event Withdrawal(address indexed src, uint256 wad);

        function deposit() external payable;

        function withdraw(uint256 wad) external;

        function balanceOf(address account) external view returns (uint256);

        function approve(address guy, uint256 wad) external returns (bool);

        function transfer(address dst, uint256 wad) external returns (bool);

        function totalSupply() external view returns (uint256);
    }
}
