//! L2 predeploy bindings.
//!
//! These contracts live at fixed addresses on every L2 network
//! (see `config::deployments::predeploys`).

use alloy_sol_types::sol;

sol! {
    /// L2CrossDomainMessenger - sends messages from L2 to L1
    /// Address: 0x4200000000000000000000000000000000000007
    #[sol(rpc)]
    interface IL2CrossDomainMessenger {
        event SentMessage(
            address indexed target,
            address sender,
            bytes message,
            uint256 messageNonce,
            uint256 gasLimit
        );

        event RelayedMessage(bytes32 indexed msgHash);

        function sendMessage(address _target, bytes memory _message, uint32 _gasLimit) external;

        function xDomainMessageSender() external view returns (address);

        function relayedMessages(bytes32 msgHash) external view returns (bool);

        function messageNonce() external view returns (uint256);
    }

    /// L2StandardBridge - L2 side of the standard bridge
    /// Address: 0x4200000000000000000000000000000000000010
    #[sol(rpc)]
    interface IL2StandardBridge {
        event WithdrawalInitiated(
            address indexed _l1Token,
            address indexed _l2Token,
            address indexed _from,
            address _to,
            uint256 _amount,
            bytes _data
        );

        event DepositFinalized(
            address indexed _l1Token,
            address indexed _l2Token,
            address indexed _from,
            address _to,
            uint256 _amount,
            bytes _data
        );

        function withdraw(address _l2Token, uint256 _amount, uint32 _l1Gas, bytes calldata _data) external payable;

        function withdrawTo(
            address _l2Token,
            address _to,
            uint256 _amount,
            uint32 _l1Gas,
            bytes calldata _data
        ) external payable;

        function l1TokenBridge() external view returns (address);
    }

    /// iOVM_L1BlockNumber - exposes the latest known L1 block number
    /// Address: 0x4200000000000000000000000000000000000013
    #[sol(rpc)]
    interface IL1BlockNumber {
        function getL1BlockNumber() external view returns (uint256);
    }

    /// OVM_L2ToL1MessagePasser - records messages to be relayed on L1
    /// Address: 0x4200000000000000000000000000000000000000
    #[sol(rpc)]
    interface IL2ToL1MessagePasser {
        event L2ToL1Message(uint256 _nonce, address _sender, bytes _data);

        function passMessageToL1(bytes calldata _message) external;

        function sentMessages(bytes32 msgHash) external view returns (bool);
    }

    /// OVM_DeployerWhitelist - gates contract deployment on L2
    /// Address: 0x4200000000000000000000000000000000000002
    #[sol(rpc)]
    interface IDeployerWhitelist {
        event OwnerChanged(address oldOwner, address newOwner);

        event WhitelistStatusChanged(address deployer, bool whitelisted);

        function owner() external view returns (address);

        function whitelist(address deployer) external view returns (bool);

        function isDeployerAllowed(address _deployer) external view returns (bool);

        function setWhitelistedDeployer(address _deployer, bool _isWhitelisted) external;

        function enableArbitraryContractDeployment() external;
    }

    /// OVM_GasPriceOracle - L2 execution and L1 data fee parameters
    /// Address: 0x420000000000000000000000000000000000000F
    #[sol(rpc)]
    interface IGasPriceOracle {
        function gasPrice() external view returns (uint256);

        function l1BaseFee() external view returns (uint256);

        function overhead() external view returns (uint256);

        function scalar() external view returns (uint256);

        function decimals() external view returns (uint256);

        function getL1Fee(bytes memory _data) external view returns (uint256);

        function getL1GasUsed(bytes memory _data) external view returns (uint256);
    }

    /// OVM_SequencerFeeVault - accumulates sequencer fees until withdrawn to L1
    /// Address: 0x4200000000000000000000000000000000000011
    #[sol(rpc)]
    interface ISequencerFeeVault {
        function l1FeeWallet() external view returns (address);

        function MIN_WITHDRAWAL_AMOUNT() external view returns (uint256);

        function withdraw() external;
    }
}
